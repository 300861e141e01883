use api::Comment;
use dioxus::prelude::*;

use crate::components::Avatar;

#[component]
pub fn CommentCard(comment: Comment) -> Element {
    let author = comment.author_name().to_string();
    let initials = comment.initials();
    let text = comment.text.clone().filter(|t| !t.is_empty());

    let Some(username) = comment.author_username().map(str::to_string) else {
        // Nobody to link to
        return rsx! {
            div { class: "comment-card",
                Avatar { picture: None, initials, size: 32 }
                div { class: "comment-body",
                    p { strong { "{author}" } }
                    if let Some(text) = text {
                        p { class: "comment-text", "{text}" }
                    }
                }
            }
        };
    };
    let profile = format!("/{username}");

    rsx! {
        div { class: "comment-card",
            Link { to: profile.clone(),
                Avatar { picture: None, initials, size: 32 }
            }
            Link { to: profile, class: "comment-body",
                p {
                    strong { "{author}" }
                    " "
                    span { class: "muted", "@{username}" }
                }
                if let Some(text) = text {
                    p { class: "comment-text", "{text}" }
                }
            }
        }
    }
}
