use api::{Activity, PostCategory};
use chrono::{DateTime, NaiveDateTime};
use dioxus::prelude::*;

use crate::components::{category_tone, Badge};
use crate::icons::{FaCalendar, FaLocationDot};
use crate::Icon;

/// Render an ISO 8601 event time for humans. Strings that do not parse are
/// shown as they came.
pub fn format_event_time(raw: &str) -> String {
    const FORMAT: &str = "%a %b %-d, %Y %-I:%M %p";
    if let Ok(time) = DateTime::parse_from_rfc3339(raw) {
        return time.format(FORMAT).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(time) = NaiveDateTime::parse_from_str(raw, pattern) {
            return time.format(FORMAT).to_string();
        }
    }
    raw.to_string()
}

/// Summary of a project, club or event.
#[component]
pub fn ActivityCard(activity: Activity) -> Element {
    let kind = activity.kind();
    let info = activity.info().clone();
    let name = activity.name().to_string();

    rsx! {
        div { class: "activity-card",
            div { class: "activity-heading",
                h3 { class: "activity-name", "{name}" }
                Badge { tone: category_tone(PostCategory::from(kind)), "{kind.label()}" }
                if let Activity::Project { active, .. } = &activity {
                    span { class: "muted", if *active { "Active" } else { "Inactive" } }
                }
            }
            if let Some(description) = info.description.as_ref().filter(|d| !d.is_empty()) {
                p { class: "activity-description", "{description}" }
            }
            if let Activity::Event { location, start_time, end_time, .. } = &activity {
                div { class: "activity-event",
                    if let Some(location) = location {
                        span { class: "row",
                            Icon { icon: FaLocationDot, width: 12, height: 12 }
                            "{location}"
                        }
                    }
                    if let Some(start) = start_time {
                        span { class: "row",
                            Icon { icon: FaCalendar, width: 12, height: 12 }
                            "{format_event_time(start)}"
                            if let Some(end) = end_time {
                                " - {format_event_time(end)}"
                            }
                        }
                    }
                }
            }
            if !info.tags.is_empty() {
                div { class: "tags",
                    for tag in info.tags.iter() {
                        Badge { key: "{tag}", "{tag}" }
                    }
                }
            }
        }
    }
}
