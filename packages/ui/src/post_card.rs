use api::{NewComment, Post};
use dioxus::prelude::*;

use crate::components::{category_tone, use_toast, Avatar, Badge, Button, Dialog, Input, ToastOptions};
use crate::context::use_api;
use crate::icons::{FaComment, FaHeart, FaShareNodes};
use crate::Icon;

/// Like state after a successful toggle.
fn toggled(liked: bool, count: i64) -> (bool, i64) {
    if liked {
        (false, count - 1)
    } else {
        (true, count + 1)
    }
}

/// A like toggle made on this card and the server state it started from.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LocalLike {
    from: (bool, i64),
    now: (bool, i64),
}

/// Like state to show. A local toggle holds only while the post still carries
/// the state it started from; a refetched post with other values replaces it.
fn shown_like(server: (bool, i64), local: Option<LocalLike>) -> (bool, i64) {
    match local {
        Some(toggle) if toggle.from == server => toggle.now,
        _ => server,
    }
}

/// A post in a feed: author, content, category badge, like and reply.
#[component]
pub fn PostCard(post: Post) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut local_like = use_signal(|| Option::<LocalLike>::None);
    let mut replying = use_signal(|| false);
    let mut reply = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let post_id = post.id;
    let server_like = (post.liked, post.like_number);
    let (liked, like_count) = shown_like(server_like, local_like());
    let initials = post.initials();
    let (category, badge_label) = post.category();
    let author = post.author_name().to_string();
    let profile = format!("/{}", post.username);
    let permalink = format!("/post/{post_id}");

    let like_api = api.clone();
    let toggle_like = move |_| {
        let api = like_api.clone();
        async move {
            let (currently, count) = shown_like(server_like, local_like());
            let result = if currently {
                api.unlike(post_id).await
            } else {
                api.like(post_id).await
            };
            match result {
                Ok(()) => local_like.set(Some(LocalLike {
                    from: server_like,
                    now: toggled(currently, count),
                })),
                Err(e) => tracing::warn!(post = post_id, "like toggle failed: {e}"),
            }
        }
    };

    let send_reply = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            let comment = NewComment {
                post: post_id,
                text: reply().trim().to_string(),
            };
            sending.set(true);
            match api.create_comment(&comment).await {
                Ok(()) => {
                    reply.set(String::new());
                    replying.set(false);
                    toast.success("Reply posted".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    toast.error(e.user_message("Could not post reply"), ToastOptions::new());
                }
            }
            sending.set(false);
        }
    };

    rsx! {
        article { class: "post-card",
            Link { to: profile.clone(),
                Avatar { picture: None, initials }
            }
            div { class: "post-body",
                Link { to: profile.clone(), class: "post-author",
                    strong { "{author}" }
                    " "
                    span { class: "muted", "@{post.username}" }
                }
                Link { to: permalink.clone(), class: "post-content",
                    if let Some(title) = post.title.as_ref().filter(|t| !t.is_empty()) {
                        p { class: "post-title", "{title}" }
                    }
                    if let Some(text) = post.text.as_ref().filter(|t| !t.is_empty()) {
                        p { class: "post-text", "{text}" }
                    }
                    div { class: "tags",
                        Badge { tone: category_tone(category), "{badge_label}" }
                    }
                }
                div { class: "post-actions",
                    button {
                        class: if liked { "icon-button liked" } else { "icon-button" },
                        aria_label: if liked { "Unlike" } else { "Like" },
                        onclick: toggle_like,
                        Icon { icon: FaHeart, width: 18, height: 18 }
                        span { "{like_count}" }
                    }
                    button {
                        class: "icon-button",
                        aria_label: "Reply",
                        onclick: move |_| replying.set(true),
                        Icon { icon: FaComment, width: 18, height: 18 }
                    }
                    Link { to: permalink, class: "icon-button", aria_label: "Open post",
                        Icon { icon: FaShareNodes, width: 18, height: 18 }
                    }
                }
            }
        }

        if replying() {
            Dialog {
                title: "Post a reply",
                on_close: move |_| replying.set(false),
                form { class: "stack", onsubmit: send_reply,
                    Input {
                        class: "w-full",
                        placeholder: "Write your reply",
                        value: reply(),
                        oninput: move |evt: FormEvent| reply.set(evt.value()),
                    }
                    div { class: "row-end",
                        Button { r#type: "submit", disabled: sending() || reply().trim().is_empty(),
                            if sending() { "Posting..." } else { "Post" }
                        }
                    }
                }
            }
        }
    }
}
