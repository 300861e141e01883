//! # API crate — typed client for the FORWARD REST backend
//!
//! Every call the frontend makes goes through [`ApiClient`], which prefixes the
//! path with `/api`, echoes the `csrftoken` cookie back as `X-CSRFToken`, and
//! decodes the backend's `{detail, data}` envelope.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The fetch wrapper: URL building, CSRF header, status check, envelope decoding |
//! | [`csrf`] | Cookie parsing and the [`CookieSource`] seam (browser `document.cookie` vs. fixed) |
//! | [`error`] | [`ApiError`] and the server-provided [`Detail`] |
//! | [`models`] | Response records: users, activities, posts, comments, likes |
//! | [`requests`] | Request bodies and search parameters, with client-side validation |
//!
//! ## Endpoints
//!
//! Endpoint methods are grouped by resource in private modules, each adding an
//! `impl ApiClient` block:
//!
//! - **Sessions**: `login`, `logout`
//! - **Users**: `register`, `search_users`, `current_user`, `update_current_user`, `user`
//! - **Activities**: `search_activities`, `activity`, `create_activity`, `update_activity`, `user_activities`
//! - **Posts**: `posts`, `post`, `create_post`, `user_posts`
//! - **Likes**: `like`, `unlike`, `user_likes`
//! - **Comments**: `comments`, `create_comment`

pub mod client;
pub mod csrf;
pub mod error;
pub mod models;
pub mod requests;

mod activities;
mod comments;
mod likes;
mod posts;
mod sessions;
mod users;

pub use client::{ApiClient, Envelope};
pub use csrf::{CookieSource, StaticCookies};
#[cfg(target_arch = "wasm32")]
pub use csrf::DocumentCookies;
pub use error::{ApiError, Detail};
pub use models::{
    Activity, ActivityKind, ActivityRef, Comment, ContentType, Like, Post, PostCategory, Super,
    User,
};
pub use requests::{
    ActivitySearch, ActivityUpdate, LoginRequest, NewActivity, NewComment, NewPost, PostSearch,
    RegisterRequest, UserUpdate,
};
