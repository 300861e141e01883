use dioxus::prelude::*;
use ui::{use_auth, Footer, Header};

use crate::Route;

/// Chrome shared by every page: header, content, and the footer for
/// logged-in users. Toasts are rendered by the provider above the router.
#[component]
pub fn AppLayout() -> Element {
    let auth = use_auth();

    rsx! {
        document::Title { "FORWARD" }
        div { class: "app-shell",
            Header {}
            main { class: "page", Outlet::<Route> {} }
            if auth.is_logged_in() {
                Footer {}
            }
        }
    }
}
