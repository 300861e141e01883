use api::{Post, PostCategory, PostSearch};
use dioxus::prelude::*;

use crate::components::{Button, Input, Select};
use crate::context::use_api;
use crate::icons::FaMagnifyingGlass;
use crate::Icon;

/// Options for the category select, as `(value, label)` pairs.
pub(crate) fn category_options() -> Vec<(String, String)> {
    PostCategory::ALL
        .iter()
        .map(|c| (c.as_str().to_string(), c.label().to_string()))
        .collect()
}

/// Post search form. Results are handed to `on_results`; failed searches are
/// logged and leave the current results alone.
#[component]
pub fn SearchPosts(on_results: EventHandler<Vec<Post>>) -> Element {
    let api = use_api();
    let mut search = use_signal(String::new);
    let mut category = use_signal(|| PostCategory::Misc);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            let query = PostSearch {
                search: search(),
                category: Some(category()),
            };
            match api.posts(&query).await {
                Ok(posts) => on_results.call(posts),
                Err(e) => tracing::error!("post search failed: {e}"),
            }
        }
    };

    rsx! {
        form { class: "search-form", onsubmit: submit,
            Input {
                name: "search",
                placeholder: "What do you want to find?",
                value: search(),
                oninput: move |evt: FormEvent| search.set(evt.value()),
            }
            Select {
                options: category_options(),
                value: category().as_str().to_string(),
                onchange: move |value: String| {
                    if let Ok(parsed) = value.parse() {
                        category.set(parsed);
                    }
                },
            }
            Button { r#type: "submit",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                "Search"
            }
        }
    }
}
