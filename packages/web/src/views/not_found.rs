use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        div { class: "centered",
            h1 { "Page not found" }
            p { class: "muted", "Nothing lives at {path}." }
            Link { to: "/", class: "button button-primary", "Go home" }
        }
    }
}
