use api::Activity;
use dioxus::prelude::*;
use ui::{ActivityCard, SearchActivities};

#[component]
pub fn Activities() -> Element {
    let mut results = use_signal(|| Option::<Vec<Activity>>::None);

    rsx! {
        div { class: "page-narrow",
            h1 { class: "page-title", "Activities" }
            SearchActivities { on_results: move |found| results.set(Some(found)) }
            if let Some(found) = results() {
                if found.is_empty() {
                    p { class: "muted", "Nothing matched." }
                }
                div { class: "card-list",
                    for activity in found {
                        ActivityCard { key: "{activity.id()}", activity: activity.clone() }
                    }
                }
            } else {
                p { class: "muted", "Search for a project, club or event." }
            }
        }
    }
}
