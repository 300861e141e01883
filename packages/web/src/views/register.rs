//! Registration page view.

use api::RegisterRequest;
use dioxus::prelude::*;
use ui::components::{use_toast, Button, ButtonVariant, Input, Label, PasswordInput, ToastOptions};
use ui::{use_api, use_auth};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let toast = use_toast();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut display_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, leave
    if auth.is_logged_in() {
        nav.replace(Route::Home {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            error.set(None);
            let request = RegisterRequest {
                username: username().trim().to_string(),
                display_name: display_name().trim().to_string(),
                password: password(),
                password_confirm: confirm_password(),
            };

            loading.set(true);
            match api.register(&request).await {
                Ok(user) => {
                    auth.login(user);
                    toast.success("Welcome to FORWARD".to_string(), ToastOptions::new());
                    nav.replace(Route::Home {});
                }
                Err(e) => {
                    error.set(Some(e.user_message("Registration failed")));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "Create Account" }
            p { class: "muted", "Sign up for FORWARD" }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                div { class: "field",
                    Label { html_for: "display_name", "Display name" }
                    Input {
                        class: "w-full",
                        id: "display_name",
                        required: true,
                        value: display_name(),
                        oninput: move |evt: FormEvent| display_name.set(evt.value()),
                    }
                }

                div { class: "field",
                    Label { html_for: "username", "Username" }
                    Input {
                        class: "w-full",
                        id: "username",
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
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                div { class: "field",
                    Label { html_for: "password_confirm", "Confirm password" }
                    PasswordInput {
                        class: "w-full",
                        id: "password_confirm",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch muted",
                "Already have an account? "
                Link { to: Route::Login { from: String::new() }, "Log in" }
            }
        }
    }
}
