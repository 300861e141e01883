//! The "create" dialog behind the footer's "+" button: a post form and an
//! activity form on separate tabs.

use api::{Activity, ActivityKind, ActivitySearch, NewActivity, NewPost, PostCategory};
use dioxus::prelude::*;

use crate::components::{use_toast, Button, Dialog, Input, Label, Select, Tabs, Textarea, ToastOptions};
use crate::context::{use_api, use_feed_refresh};
use crate::search_activities::kind_options;
use crate::search_posts::category_options;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CreateTab {
    Post,
    Activity,
}

#[component]
pub fn CreateDialog(on_close: EventHandler<()>) -> Element {
    let mut tab = use_signal(|| CreateTab::Post);
    let active = match tab() {
        CreateTab::Post => 0,
        CreateTab::Activity => 1,
    };

    rsx! {
        Dialog { title: "Create a Post or Activity", on_close,
            Tabs {
                labels: vec!["Post".to_string(), "Activity".to_string()],
                active,
                on_select: move |index: usize| {
                    tab.set(if index == 0 { CreateTab::Post } else { CreateTab::Activity });
                },
            }
            if tab() == CreateTab::Post {
                PostForm { on_done: on_close }
            } else {
                ActivityForm { on_done: on_close }
            }
        }
    }
}

#[component]
fn PostForm(on_done: EventHandler<()>) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut refresh = use_feed_refresh();

    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut category = use_signal(|| PostCategory::Misc);
    let mut activity_name = use_signal(String::new);
    let mut activity_id = use_signal(|| Option::<i64>::None);
    let mut suggestions = use_signal(Vec::<Activity>::new);
    let mut busy = use_signal(|| false);

    // Autocomplete: look up activities of the selected kind on each keystroke
    let lookup_api = api.clone();
    let on_activity_input = move |evt: FormEvent| {
        let api = lookup_api.clone();
        let term = evt.value();
        activity_name.set(term.clone());
        activity_id.set(None);
        async move {
            let Some(kind) = category().activity_kind() else {
                return;
            };
            let query = ActivitySearch {
                search: term,
                kind: Some(kind),
            };
            match api.search_activities(&query).await {
                Ok(found) => suggestions.set(found),
                Err(e) => tracing::debug!("activity lookup failed: {e}"),
            }
        }
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            let post = NewPost::new(title(), content(), category(), activity_id());
            busy.set(true);
            match api.create_post(&post).await {
                Ok(()) => {
                    toast.success("Post created".to_string(), ToastOptions::new());
                    refresh.bump();
                    on_done.call(());
                }
                Err(e) => {
                    toast.error(e.user_message("Could not create post"), ToastOptions::new());
                }
            }
            busy.set(false);
        }
    };

    rsx! {
        form { class: "stack", onsubmit: submit,
            div { class: "field",
                Label { html_for: "title", "Post Title" }
                Input {
                    id: "title",
                    name: "title",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
            }
            div { class: "field",
                Label { html_for: "post-type", "Post Type" }
                Select {
                    id: "post-type",
                    options: category_options(),
                    value: category().as_str().to_string(),
                    onchange: move |value: String| {
                        if let Ok(parsed) = value.parse() {
                            category.set(parsed);
                            activity_id.set(None);
                            suggestions.set(Vec::new());
                        }
                    },
                }
            }
            if category().activity_kind().is_some() {
                div { class: "field",
                    Label { html_for: "activity", "Activity Name" }
                    Input {
                        id: "activity",
                        value: activity_name(),
                        oninput: on_activity_input,
                    }
                    if activity_id().is_none() && !suggestions.read().is_empty() {
                        div { class: "suggestions",
                            for activity in suggestions() {
                                Suggestion {
                                    key: "{activity.id()}",
                                    activity: activity.clone(),
                                    on_pick: move |picked: Activity| {
                                        activity_name.set(picked.name().to_string());
                                        activity_id.set(Some(picked.id()));
                                        suggestions.set(Vec::new());
                                    },
                                }
                            }
                        }
                    }
                }
            }
            div { class: "field",
                Label { html_for: "content", "Post Content" }
                Textarea {
                    id: "content",
                    value: content(),
                    oninput: move |evt: FormEvent| content.set(evt.value()),
                }
            }
            div { class: "row-end",
                Button { r#type: "submit", disabled: busy(),
                    if busy() { "Posting..." } else { "Post" }
                }
            }
        }
    }
}

#[component]
fn Suggestion(activity: Activity, on_pick: EventHandler<Activity>) -> Element {
    let label = activity.name().to_string();
    rsx! {
        button {
            r#type: "button",
            class: "suggestion",
            onclick: move |_| on_pick.call(activity.clone()),
            "{label}"
        }
    }
}

#[component]
fn ActivityForm(on_done: EventHandler<()>) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut refresh = use_feed_refresh();

    let mut kind = use_signal(|| ActivityKind::Project);
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut start_time = use_signal(String::new);
    let mut end_time = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            let activity = NewActivity::new(kind(), name(), description()).with_event_details(
                location(),
                start_time(),
                end_time(),
            );
            busy.set(true);
            match api.create_activity(&activity).await {
                Ok(created) => {
                    toast.success(format!("Created {}", created.name()), ToastOptions::new());
                    refresh.bump();
                    on_done.call(());
                }
                Err(e) => {
                    toast.error(e.user_message("Could not create activity"), ToastOptions::new());
                }
            }
            busy.set(false);
        }
    };

    rsx! {
        form { class: "stack", onsubmit: submit,
            div { class: "field",
                Label { html_for: "activity-type", "Activity Type" }
                Select {
                    id: "activity-type",
                    options: kind_options(),
                    value: kind().as_str().to_string(),
                    onchange: move |value: String| {
                        if let Ok(parsed) = value.parse() {
                            kind.set(parsed);
                        }
                    },
                }
            }
            div { class: "field",
                Label { html_for: "name", "Name" }
                Input {
                    id: "name",
                    name: "name",
                    required: true,
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
            }
            div { class: "field",
                Label { html_for: "description", "Description" }
                Textarea {
                    id: "description",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
            }
            if kind() == ActivityKind::Event {
                div { class: "field",
                    Label { html_for: "location", "Location" }
                    Input {
                        id: "location",
                        value: location(),
                        oninput: move |evt: FormEvent| location.set(evt.value()),
                    }
                }
                div { class: "field",
                    Label { html_for: "start_time", "Start" }
                    Input {
                        id: "start_time",
                        r#type: "datetime-local",
                        value: start_time(),
                        oninput: move |evt: FormEvent| start_time.set(evt.value()),
                    }
                }
                div { class: "field",
                    Label { html_for: "end_time", "End" }
                    Input {
                        id: "end_time",
                        r#type: "datetime-local",
                        value: end_time(),
                        oninput: move |evt: FormEvent| end_time.set(evt.value()),
                    }
                }
            }
            div { class: "row-end",
                Button { r#type: "submit", disabled: busy(),
                    if busy() { "Creating..." } else { "Create" }
                }
            }
        }
    }
}
