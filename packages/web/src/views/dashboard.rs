use api::{Activity, ActivityUpdate, Post};
use dioxus::prelude::*;
use ui::components::{
    use_toast, Accordion, AccordionItem, Button, ButtonVariant, Input, Label, Textarea, ToastOptions,
};
use ui::{use_api, use_auth, use_refreshing_resource, ActivityCard, PostCard};

/// Fields of the inline editor. Unchanged values are left out of the PATCH.
fn build_update(activity: &Activity, name: &str, description: &str) -> ActivityUpdate {
    let mut update = ActivityUpdate::new(activity.id(), activity.kind());
    let name = name.trim();
    if !name.is_empty() && name != activity.name() {
        update.name = Some(name.to_string());
    }
    let description = description.trim();
    if description != activity.info().description.as_deref().unwrap_or_default() {
        update.description = Some(description.to_string());
    }
    update
}

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let api = use_api();
    let username = auth.user().map(|u| u.username).unwrap_or_default();

    let mut activities = use_signal(Vec::<Activity>::new);
    let mut liked = use_signal(Vec::<Post>::new);

    let _mine = use_refreshing_resource({
        let api = api.clone();
        let username = username.clone();
        move || {
            let api = api.clone();
            let username = username.clone();
            async move {
                match api.user_activities(&username).await {
                    Ok(found) => activities.set(found),
                    Err(e) => tracing::error!("loading activities of {username} failed: {e}"),
                }
            }
        }
    });

    // Likes only carry post ids; each post is fetched on its own
    let _likes = use_refreshing_resource(move || {
        let api = api.clone();
        let username = username.clone();
        async move {
            let likes = match api.user_likes(&username).await {
                Ok(likes) => likes,
                Err(e) => {
                    tracing::error!("loading likes of {username} failed: {e}");
                    return;
                }
            };
            let mut posts = Vec::with_capacity(likes.len());
            for like in likes {
                match api.post(like.post).await {
                    Ok(post) => posts.push(post),
                    Err(e) => tracing::warn!("liked post {} unavailable: {e}", like.post),
                }
            }
            liked.set(posts);
        }
    });

    rsx! {
        div { class: "page-narrow",
            h1 { class: "page-title", "Dashboard" }

            section { class: "section",
                h2 { "Your activities" }
                if activities.read().is_empty() {
                    p { class: "muted", "You are not leading any activities yet." }
                }
                Accordion {
                    for (index, activity) in activities().into_iter().enumerate() {
                        AccordionItem { key: "{activity.id()}", index, title: activity.name().to_string(),
                            ActivityEditor {
                                activity: activity.clone(),
                                on_saved: move |saved: Activity| {
                                    if let Some(slot) = activities.write().get_mut(index) {
                                        *slot = saved;
                                    }
                                },
                            }
                        }
                    }
                }
            }

            section { class: "section",
                h2 { "Liked posts" }
                if liked.read().is_empty() {
                    p { class: "muted", "Posts you like show up here." }
                }
                for post in liked() {
                    PostCard { key: "{post.id}", post: post.clone() }
                }
            }
        }
    }
}

#[component]
fn ActivityEditor(activity: Activity, on_saved: EventHandler<Activity>) -> Element {
    let api = use_api();
    let toast = use_toast();
    let initial_name = activity.name().to_string();
    let initial_description = activity.info().description.clone().unwrap_or_default();
    let mut name = use_signal(move || initial_name);
    let mut description = use_signal(move || initial_description);
    let mut editing = use_signal(|| false);

    let target = activity.clone();
    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let update = build_update(&target, &name(), &description());
        async move {
            match api.update_activity(&update).await {
                Ok(saved) => {
                    editing.set(false);
                    toast.success("Activity updated".to_string(), ToastOptions::new());
                    on_saved.call(saved);
                }
                Err(e) => toast.error(e.user_message("Could not update activity"), ToastOptions::new()),
            }
        }
    };

    rsx! {
        if editing() {
            form { class: "stack", onsubmit: handle_save,
                div { class: "field",
                    Label { html_for: "activity-name-{activity.id()}", "Name" }
                    Input {
                        class: "w-full",
                        id: "activity-name-{activity.id()}",
                        required: true,
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }
                div { class: "field",
                    Label { html_for: "activity-desc-{activity.id()}", "Description" }
                    Textarea {
                        id: "activity-desc-{activity.id()}",
                        value: description(),
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                    }
                }
                div { class: "row-end",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| editing.set(false),
                        "Cancel"
                    }
                    Button { variant: ButtonVariant::Primary, r#type: "submit", "Save" }
                }
            }
        } else {
            ActivityCard { activity: activity.clone() }
            div { class: "row-end",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| editing.set(true),
                    "Edit"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Super;

    fn club(name: &str, description: Option<&str>) -> Activity {
        Activity::Club {
            info: Super {
                id: 7,
                name: Some(name.to_string()),
                leader: Some(1),
                followers: vec![],
                description: description.map(str::to_string),
                links: vec![],
                tags: vec![],
            },
        }
    }

    #[test]
    fn test_unchanged_fields_are_omitted() {
        let update = build_update(&club("Chess", Some("Weekly games")), "Chess", "Weekly games");
        assert_eq!(update.id, 7);
        assert_eq!(update.name, None);
        assert_eq!(update.description, None);
    }

    #[test]
    fn test_changed_fields_are_sent() {
        let update = build_update(&club("Chess", None), " Chess Club ", "Tuesdays");
        assert_eq!(update.name.as_deref(), Some("Chess Club"));
        assert_eq!(update.description.as_deref(), Some("Tuesdays"));
    }

    #[test]
    fn test_blank_name_is_not_sent() {
        let update = build_update(&club("Chess", None), "  ", "");
        assert_eq!(update.name, None);
        assert_eq!(update.description, None);
    }
}
