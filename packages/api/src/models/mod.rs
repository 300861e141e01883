//! # Response records
//!
//! Plain mirrors of the JSON objects the backend sends. They derive
//! `Clone + PartialEq` so pages can hand them straight to components as props.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | A registered user: id, username, display name, optional picture URL. |
//! | [`Super`] | The fields every activity shares (name, leader, followers, links, tags). |
//! | [`Activity`] | A project, club or event, tagged by the `"type"` key. |
//! | [`Post`] | A text post with its comments, like state and optional activity reference. |
//! | [`Comment`] | A reply under a post. |
//! | [`Like`] | A (user, post) pair. |

mod activity;
mod comment;
mod like;
mod post;
mod user;

pub use activity::{Activity, ActivityKind, PostCategory, Super};
pub use comment::Comment;
pub use like::Like;
pub use post::{ActivityRef, ContentType, Post};
pub use user::User;
