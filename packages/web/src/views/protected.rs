use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

/// Gate for pages that need a session. Anonymous visitors are sent to the
/// login page, which brings them back here afterwards.
#[component]
pub fn Protected() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let nav = use_navigator();

    if !auth.is_logged_in() {
        nav.replace(Route::Login {
            from: route.to_string(),
        });
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}
