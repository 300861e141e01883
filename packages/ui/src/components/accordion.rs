//! Collapsible sections where at most one is open at a time.

use dioxus::prelude::*;

use crate::icons::FaChevronDown;
use crate::Icon;

#[derive(Clone, Copy)]
struct OpenItem(Signal<Option<usize>>);

/// Opening an item closes whichever was open before.
fn toggle(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[component]
pub fn Accordion(children: Element) -> Element {
    use_context_provider(|| OpenItem(Signal::new(None)));
    rsx! {
        div { class: "accordion", {children} }
    }
}

#[component]
pub fn AccordionItem(index: usize, title: String, children: Element) -> Element {
    let OpenItem(mut open) = use_context::<OpenItem>();
    let expanded = open() == Some(index);

    rsx! {
        div { class: "accordion-item",
            button {
                r#type: "button",
                class: "accordion-trigger",
                aria_expanded: expanded,
                onclick: move |_| {
                    let next = toggle(open(), index);
                    open.set(next);
                },
                span { "{title}" }
                span { class: if expanded { "accordion-chevron accordion-chevron-open" } else { "accordion-chevron" },
                    Icon { icon: FaChevronDown, width: 12, height: 12 }
                }
            }
            if expanded {
                div { class: "accordion-content", {children} }
            }
        }
    }
}
