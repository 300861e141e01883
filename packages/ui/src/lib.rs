//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const COMPONENTS_CSS: Asset = asset!("/assets/components.css");

mod session;
pub use session::make_session;

mod context;
pub use context::{
    use_api, use_config, use_feed_refresh, use_feed_refresh_provider, use_refreshing_resource,
    FeedRefresh,
};

mod auth;
pub use auth::{use_auth, Auth, AuthProvider, AuthState};

pub mod viewport;
pub use viewport::{use_client, use_is_desktop, WindowDimensions};

mod toast;

mod header;
pub use header::Header;

mod create_dialog;
mod footer;
pub use footer::Footer;

mod post_card;
pub use post_card::PostCard;

mod comment_card;
pub use comment_card::CommentCard;

mod activity_card;
pub use activity_card::{format_event_time, ActivityCard};

mod search_posts;
pub use search_posts::SearchPosts;

mod search_activities;
pub use search_activities::SearchActivities;
