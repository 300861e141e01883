use dioxus::prelude::*;

/// A row of tab triggers. The caller renders the active panel.
#[component]
pub fn Tabs(labels: Vec<String>, active: usize, on_select: EventHandler<usize>) -> Element {
    rsx! {
        div { class: "tabs", role: "tablist",
            for (index, label) in labels.into_iter().enumerate() {
                button {
                    key: "{index}",
                    r#type: "button",
                    role: "tab",
                    class: if index == active { "tab tab-active" } else { "tab" },
                    aria_selected: index == active,
                    onclick: move |_| on_select.call(index),
                    "{label}"
                }
            }
        }
    }
}
