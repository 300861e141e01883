use dioxus::prelude::*;

/// Panel that slides in from the left edge of the screen over a backdrop.
#[component]
pub fn Sheet(
    open: bool,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }
    rsx! {
        div {
            class: "sheet-backdrop",
            onclick: move |_| on_close.call(()),
        }
        aside { class: "sheet sheet-left", {children} }
    }
}
