use dioxus::prelude::*;

use store::ClientConfig;
use ui::components::ToastProvider;
use ui::AuthProvider;
use views::{
    Account, Activities, AppLayout, Dashboard, Home, Login, NotFound, PostPage, Protected,
    Register, UserPage,
};

#[cfg(feature = "server")]
mod proxy;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/login?:from")]
        Login { from: String },
        #[route("/register")]
        Register {},
        #[layout(Protected)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/activities")]
            Activities {},
            #[route("/account")]
            Account {},
            #[route("/post/:post_id")]
            PostPage { post_id: i64 },
            #[route("/:username")]
            UserPage { username: String },
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded client configuration; see `store::config` for the keys.
const CONFIG_TOML: &str = include_str!("../forward.toml");

fn load_config() -> ClientConfig {
    ClientConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("invalid {}, using defaults: {e}", ClientConfig::filename());
        ClientConfig::default()
    })
}

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("failed to start the tokio runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let proxy = proxy::ProxyState::from_env();
    tracing::info!(backend = %proxy.backend(), "forwarding /api");

    // API calls go to the backend, everything else is the app
    let router = proxy::router(proxy).serve_dioxus_application(ServeConfig::new(), App);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind the listen address");
    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, router.into_make_service()).await {
        tracing::error!("server stopped: {e}");
    }
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);
    use_context_provider(move || api::ApiClient::from_config(&config));
    ui::use_feed_refresh_provider();

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: ui::COMPONENTS_CSS }
        document::Stylesheet { href: MAIN_CSS }

        ToastProvider {
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}
