use api::{User, UserUpdate};
use dioxus::prelude::*;
use ui::components::{use_toast, Avatar, Button, ButtonVariant, Input, Label, ToastOptions};
use ui::{use_api, use_auth};

/// Fields that differ from the current account, or `None` when nothing
/// changed.
fn changed_fields(user: &User, display_name: &str, picture: &str) -> Option<UserUpdate> {
    let display_name = display_name.trim();
    let picture = picture.trim();
    let update = UserUpdate {
        display_name: (display_name != user.display_name).then(|| display_name.to_string()),
        profile_picture: (picture != user.profile_picture.as_deref().unwrap_or_default())
            .then(|| picture.to_string()),
    };
    (update != UserUpdate::default()).then_some(update)
}

/// Edit the display name and profile picture of the logged-in user.
#[component]
pub fn Account() -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let toast = use_toast();

    let mut display_name = use_signal(move || auth.user().map(|u| u.display_name).unwrap_or_default());
    let mut picture = use_signal(move || {
        auth.user()
            .and_then(|u| u.profile_picture)
            .unwrap_or_default()
    });
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            error.set(None);
            let Some(current) = auth.user() else {
                return;
            };
            let Some(update) = changed_fields(&current, &display_name(), &picture()) else {
                toast.info("Nothing to save".to_string(), ToastOptions::new());
                return;
            };
            saving.set(true);
            match api.update_current_user(&update).await {
                Ok(updated) => {
                    auth.update(updated);
                    toast.success("Saved".to_string(), ToastOptions::new());
                }
                Err(e) => error.set(Some(e.user_message("Could not save changes"))),
            }
            saving.set(false);
        }
    };

    let Some(user) = auth.user() else {
        return rsx! {};
    };

    rsx! {
        div { class: "page-narrow",
            h1 { class: "page-title", "Account" }
            div { class: "profile-summary",
                Avatar {
                    picture: user.picture().map(str::to_string),
                    initials: user.initials(),
                    size: 64,
                }
                div {
                    p { strong { "{user.display_name}" } }
                    p { class: "muted", "@{user.username}" }
                }
            }

            form { class: "stack", onsubmit: handle_save,
                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }
                div { class: "field",
                    Label { html_for: "display_name", "Display name" }
                    Input {
                        class: "w-full",
                        id: "display_name",
                        required: true,
                        value: display_name(),
                        oninput: move |evt: FormEvent| display_name.set(evt.value()),
                    }
                }
                div { class: "field",
                    Label { html_for: "profile_picture", "Profile picture URL" }
                    Input {
                        class: "w-full",
                        id: "profile_picture",
                        r#type: "url",
                        placeholder: "https://",
                        value: picture(),
                        oninput: move |evt: FormEvent| picture.set(evt.value()),
                    }
                }
                div { class: "row-end",
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> User {
        User {
            id: 1,
            username: "jdoe".to_string(),
            display_name: "Jane".to_string(),
            profile_picture: None,
        }
    }

    #[test]
    fn test_nothing_changed() {
        assert_eq!(changed_fields(&jane(), " Jane ", ""), None);
    }

    #[test]
    fn test_only_changed_fields_are_sent() {
        let update = changed_fields(&jane(), "Janet", "").unwrap();
        assert_eq!(update.display_name.as_deref(), Some("Janet"));
        assert_eq!(update.profile_picture, None);

        let update = changed_fields(&jane(), "Jane", "https://img.test/j.png").unwrap();
        assert_eq!(update.display_name, None);
        assert_eq!(update.profile_picture.as_deref(), Some("https://img.test/j.png"));
    }
}
