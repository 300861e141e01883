use api::{Comment, NewComment, Post};
use dioxus::prelude::*;
use ui::components::{use_toast, Button, ButtonVariant, Textarea, ToastOptions};
use ui::{use_api, CommentCard, PostCard};

/// A single post with its comment thread.
#[component]
pub fn PostPage(post_id: ReadSignal<i64>) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut reply = use_signal(String::new);
    let mut comments = use_signal(Vec::<Comment>::new);

    let post = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            let id = post_id();
            async move { api.post(id).await }
        }
    });

    let mut thread = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            let id = post_id();
            async move {
                match api.comments(id).await {
                    Ok(found) => comments.set(found),
                    Err(e) => tracing::error!("loading comments for post {id} failed: {e}"),
                }
            }
        }
    });

    let handle_reply = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            let comment = NewComment {
                post: post_id(),
                text: reply().trim().to_string(),
            };
            match api.create_comment(&comment).await {
                Ok(()) => {
                    reply.set(String::new());
                    thread.restart();
                }
                Err(e) => toast.error(e.user_message("Could not post comment"), ToastOptions::new()),
            }
        }
    };

    let loaded: Option<Result<Post, String>> = post
        .read()
        .as_ref()
        .map(|r| r.clone().map_err(|e| e.user_message("Post not found")));

    rsx! {
        div { class: "page-narrow",
            if let Some(Ok(post)) = &loaded {
                PostCard { post: post.clone() }
                form { class: "stack reply-box", onsubmit: handle_reply,
                    Textarea {
                        rows: 3,
                        placeholder: "Write a comment...",
                        value: reply(),
                        oninput: move |evt: FormEvent| reply.set(evt.value()),
                    }
                    div { class: "row-end",
                        Button { variant: ButtonVariant::Primary, r#type: "submit", "Comment" }
                    }
                }
                div { class: "comment-list",
                    for comment in comments() {
                        CommentCard { key: "{comment.id}", comment: comment.clone() }
                    }
                }
            } else if let Some(Err(message)) = &loaded {
                p { class: "form-error", "{message}" }
            } else {
                p { class: "muted", "Loading..." }
            }
        }
    }
}
