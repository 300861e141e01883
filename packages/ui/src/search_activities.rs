use api::{Activity, ActivityKind, ActivitySearch};
use dioxus::prelude::*;

use crate::components::{Button, Input, Select};
use crate::context::use_api;
use crate::icons::FaMagnifyingGlass;
use crate::Icon;

pub(crate) fn kind_options() -> Vec<(String, String)> {
    ActivityKind::ALL
        .iter()
        .map(|k| (k.as_str().to_string(), k.label().to_string()))
        .collect()
}

/// Activity search form. Same error policy as [`crate::SearchPosts`].
#[component]
pub fn SearchActivities(on_results: EventHandler<Vec<Activity>>) -> Element {
    let api = use_api();
    let mut search = use_signal(String::new);
    let mut kind = use_signal(|| ActivityKind::Project);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            let query = ActivitySearch {
                search: search(),
                kind: Some(kind()),
            };
            match api.search_activities(&query).await {
                Ok(found) => on_results.call(found),
                Err(e) => tracing::error!("activity search failed: {e}"),
            }
        }
    };

    rsx! {
        form { class: "search-form", onsubmit: submit,
            Input {
                name: "search",
                placeholder: "What activities do you want to find?",
                value: search(),
                oninput: move |evt: FormEvent| search.set(evt.value()),
            }
            Select {
                options: kind_options(),
                value: kind().as_str().to_string(),
                onchange: move |value: String| {
                    if let Ok(parsed) = value.parse() {
                        kind.set(parsed);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_posts::category_options;

    #[test]
    fn test_select_options() {
        let kinds = kind_options();
        assert_eq!(kinds[0], ("project".to_string(), "Project".to_string()));
        assert_eq!(kinds.len(), 3);

        let categories = category_options();
        assert_eq!(categories.len(), 4);
        assert_eq!(categories[3], ("misc".to_string(), "Others".to_string()));
    }
}
