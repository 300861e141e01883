use dioxus::prelude::*;

use crate::icons::{FaEye, FaEyeSlash};
use crate::Icon;

#[component]
pub fn Input(
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] id: String,
    #[props(default)] name: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            class: "input {class}",
            r#type: r#type,
            id: "{id}",
            name: "{name}",
            placeholder: "{placeholder}",
            value: "{value}",
            required,
            disabled,
            autocomplete: "off",
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

/// Password field with a show/hide toggle.
#[component]
pub fn PasswordInput(
    #[props(default)] class: String,
    #[props(default)] id: String,
    #[props(default)] name: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let mut visible = use_signal(|| false);
    let input_type = if visible() { "text" } else { "password" };

    rsx! {
        div {
            class: "password-input {class}",
            Input {
                r#type: input_type.to_string(),
                id,
                name,
                placeholder,
                value,
                required: true,
                oninput: move |evt| {
                    if let Some(handler) = oninput {
                        handler.call(evt);
                    }
                },
            }
            button {
                r#type: "button",
                class: "password-toggle",
                aria_label: if visible() { "Hide password" } else { "Show password" },
                onclick: move |_| visible.toggle(),
                if visible() {
                    Icon { icon: FaEyeSlash, width: 14, height: 14 }
                } else {
                    Icon { icon: FaEye, width: 14, height: 14 }
                }
            }
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] class: String,
    #[props(default)] id: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default = 4)] rows: u32,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        textarea {
            class: "textarea {class}",
            id: "{id}",
            placeholder: "{placeholder}",
            rows: "{rows}",
            value: "{value}",
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

/// A native select over `(value, label)` pairs.
#[component]
pub fn Select(
    #[props(default)] class: String,
    #[props(default)] id: String,
    options: Vec<(String, String)>,
    value: String,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            class: "select {class}",
            id: "{id}",
            onchange: move |evt: FormEvent| onchange.call(evt.value()),
            for (option_value, label) in options {
                option {
                    key: "{option_value}",
                    selected: option_value == value,
                    value: "{option_value}",
                    "{label}"
                }
            }
        }
    }
}
