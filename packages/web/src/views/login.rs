//! Login page view with username/password form.

use dioxus::prelude::*;
use ui::components::{use_toast, Button, ButtonVariant, Input, Label, PasswordInput, ToastOptions};
use ui::{use_api, use_auth};

use crate::Route;

/// Where to go after logging in: the page that sent us here, else home.
fn return_route(from: &str) -> Route {
    if from.is_empty() {
        return Route::Home {};
    }
    match from.parse::<Route>() {
        // Never bounce back to the auth pages themselves
        Ok(Route::Login { .. }) | Ok(Route::Register {}) | Err(_) => Route::Home {},
        Ok(route) => route,
    }
}

/// Login page component.
#[component]
pub fn Login(from: String) -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let toast = use_toast();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, leave
    if auth.is_logged_in() {
        nav.replace(Route::Home {});
    }

    let target = return_route(&from);
    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let target = target.clone();
        async move {
            error.set(None);
            loading.set(true);
            match api.login(username().trim(), &password()).await {
                Ok(user) => {
                    auth.login(user);
                    toast.success("Logged in".to_string(), ToastOptions::new());
                    nav.replace(target);
                }
                Err(e) => {
                    tracing::warn!("login failed: {e}");
                    toast.error("Hmm... something went wrong".to_string(), ToastOptions::new());
                    error.set(Some(e.user_message("Invalid username or password")));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "Welcome back" }
            p { class: "muted", "Log in to FORWARD" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                div { class: "field",
                    Label { html_for: "username", "Username" }
                    Input {
                        class: "w-full",
                        id: "username",
                        name: "username",
                        required: true,
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }

                div { class: "field",
                    Label { html_for: "password", "Password" }
                    PasswordInput {
                        class: "w-full",
                        id: "password",
                        name: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Log In" }
                }
            }

            p {
                class: "auth-switch muted",
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
