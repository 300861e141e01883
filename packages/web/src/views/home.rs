use api::{Post, PostSearch};
use dioxus::prelude::*;
use ui::{use_api, use_auth, use_refreshing_resource, PostCard, SearchPosts};

use crate::Route;

/// Landing page: sign-in links for visitors, the post feed for users.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();

    rsx! {
        if auth.is_logged_in() {
            Feed {}
        } else {
            div { class: "centered welcome",
                h1 { "FORWARD" }
                p { class: "muted", "Projects, clubs and events on campus." }
                div { class: "row",
                    Link { to: Route::Login { from: String::new() }, class: "button button-primary", "Login" }
                    Link { to: Route::Register {}, class: "button button-outline", "Register" }
                }
            }
        }
    }
}

#[component]
fn Feed() -> Element {
    let api = use_api();
    let mut posts = use_signal(Vec::<Post>::new);
    let mut error = use_signal(|| Option::<String>::None);

    // Recent posts, refetched whenever something new is created
    let _loader = use_refreshing_resource(move || {
        let api = api.clone();
        async move {
            match api.posts(&PostSearch::default()).await {
                Ok(found) => {
                    posts.set(found);
                    error.set(None);
                }
                Err(e) => {
                    tracing::error!("loading feed failed: {e}");
                    error.set(Some(e.user_message("Could not load posts")));
                }
            }
        }
    });

    rsx! {
        div { class: "feed",
            SearchPosts { on_results: move |found| posts.set(found) }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
            if posts.read().is_empty() {
                p { class: "muted", "No posts yet." }
            }
            for post in posts() {
                PostCard { key: "{post.id}", post: post.clone() }
            }
        }
    }
}
