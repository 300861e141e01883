use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// A titled modal with a close button.
#[component]
pub fn Dialog(
    title: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        ModalOverlay { on_close,
            div { class: "dialog-header",
                h2 { class: "dialog-title", "{title}" }
                button {
                    class: "dialog-close",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
            }
            div { class: "dialog-body", {children} }
        }
    }
}
