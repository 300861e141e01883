//! Top bar: brand, navigation and the account menu.
//!
//! Desktop widths get inline links and an avatar dropdown; narrower windows
//! get a menu button that opens the same links in a left-hand sheet.

use api::User;
use dioxus::prelude::*;

use crate::components::{use_toast, Avatar, Sheet, ToastOptions, Toasts};
use crate::context::use_api;
use crate::icons::FaBars;
use crate::viewport::use_is_desktop;
use crate::{use_auth, Auth, Icon};

const NAV_LINKS: [(&str, &str); 2] = [("/dashboard", "Dashboard"), ("/activities", "Activities")];

#[component]
pub fn Header() -> Element {
    let auth = use_auth();
    let api = use_api();
    let toast = use_toast();
    let desktop = use_is_desktop();
    let mut menu_open = use_signal(|| false);
    let mut sheet_open = use_signal(|| false);

    let user = auth.user();

    let on_logout = move |_| {
        let api = api.clone();
        async move {
            if log_out(auth, &api, toast).await {
                menu_open.set(false);
                sheet_open.set(false);
            }
        }
    };

    rsx! {
        header { class: if user.is_some() { "site-header site-header-user" } else { "site-header" },
            Link { to: "/", class: "brand", "FORWARD" }

            if desktop {
                ul { class: "nav-links",
                    for (to, label) in NAV_LINKS {
                        li { key: "{to}", Link { to, "{label}" } }
                    }
                    li {
                        if let Some(user) = user.clone() {
                            div { class: "dropdown",
                                button {
                                    class: "dropdown-trigger",
                                    aria_label: "Account menu",
                                    onclick: move |_| menu_open.toggle(),
                                    UserAvatar { user }
                                }
                                if menu_open() {
                                    div { class: "dropdown-content",
                                        Link {
                                            to: "/account",
                                            class: "dropdown-item",
                                            onclick: move |_| menu_open.set(false),
                                            "Account"
                                        }
                                        button {
                                            class: "dropdown-item",
                                            aria_label: "Log Out",
                                            onclick: on_logout.clone(),
                                            "Log Out"
                                        }
                                    }
                                }
                            }
                        } else {
                            Link { to: "/login", "Log In" }
                        }
                    }
                }
            } else {
                button {
                    class: "menu-button",
                    aria_label: "Open navigation",
                    onclick: move |_| sheet_open.set(true),
                    Icon { icon: FaBars, width: 24, height: 24 }
                }
                Sheet {
                    open: sheet_open(),
                    on_close: move |_| sheet_open.set(false),
                    h2 { class: "sheet-title", "FORWARD Navigation" }
                    nav { class: "sheet-links",
                        for (to, label) in NAV_LINKS {
                            Link {
                                key: "{to}",
                                to,
                                onclick: move |_| sheet_open.set(false),
                                "{label}"
                            }
                        }
                    }
                    if let Some(user) = user.clone() {
                        div { class: "sheet-profile",
                            Link {
                                to: "/account",
                                class: "sheet-profile-link",
                                onclick: move |_| sheet_open.set(false),
                                UserAvatar { user: user.clone() }
                                div {
                                    p { "{user.display_name}" }
                                    p { class: "muted small", "{user.username}" }
                                }
                            }
                            button {
                                class: "button button-destructive w-full",
                                aria_label: "Log Out",
                                onclick: on_logout,
                                "Log Out"
                            }
                        }
                    } else {
                        Link {
                            to: "/login",
                            class: "button button-primary w-full sheet-login",
                            onclick: move |_| sheet_open.set(false),
                            "Login"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserAvatar(user: User) -> Element {
    rsx! {
        Avatar {
            picture: user.picture().map(str::to_string),
            initials: user.initials(),
        }
    }
}

/// Log out and report the outcome. Returns whether the session ended.
async fn log_out(mut auth: Auth, api: &api::ApiClient, toast: Toasts) -> bool {
    match auth.logout(api).await {
        Ok(()) => {
            toast.success("Successfully Logged Out".to_string(), ToastOptions::new());
            true
        }
        Err(e) => {
            tracing::warn!("logout failed: {e}");
            toast.error(e.user_message("Could not log out"), ToastOptions::new());
            false
        }
    }
}
