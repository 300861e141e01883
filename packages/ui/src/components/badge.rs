use api::PostCategory;
use dioxus::prelude::*;

/// Badge colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Blue,
    Green,
    Red,
    Yellow,
}

impl BadgeTone {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "badge badge-neutral",
            BadgeTone::Blue => "badge badge-blue",
            BadgeTone::Green => "badge badge-green",
            BadgeTone::Red => "badge badge-red",
            BadgeTone::Yellow => "badge badge-yellow",
        }
    }
}

/// Clubs are blue, projects green, events red and everything else yellow.
pub fn category_tone(category: PostCategory) -> BadgeTone {
    match category {
        PostCategory::Club => BadgeTone::Blue,
        PostCategory::Project => BadgeTone::Green,
        PostCategory::Event => BadgeTone::Red,
        PostCategory::Misc => BadgeTone::Yellow,
    }
}

#[component]
pub fn Badge(#[props(default)] tone: BadgeTone, children: Element) -> Element {
    rsx! {
        span { class: tone.class(), {children} }
    }
}
