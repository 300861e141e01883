use dioxus::prelude::*;

/// Round user picture, falling back to the user's initials.
#[component]
pub fn Avatar(
    /// Picture URL, if the user set one.
    picture: Option<String>,
    initials: String,
    #[props(default = 40)] size: u32,
) -> Element {
    let mut failed = use_signal(|| false);
    let picture = picture.filter(|src| !src.is_empty() && !failed());

    rsx! {
        span {
            class: "avatar",
            style: "width: {size}px; height: {size}px;",
            if let Some(src) = picture {
                img {
                    class: "avatar-image",
                    src: "{src}",
                    alt: "{initials}",
                    onerror: move |_| failed.set(true),
                }
            } else {
                span { class: "avatar-fallback", "{initials}" }
            }
        }
    }
}
