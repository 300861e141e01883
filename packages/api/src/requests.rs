//! Request bodies and search parameters.
//!
//! Validation here mirrors the checks the forms perform before anything is
//! sent; the backend re-validates everything.

use serde::Serialize;

use crate::error::ApiError;
use crate::models::{ActivityKind, PostCategory};

/// Minimum length the backend accepts for usernames and display names.
const MIN_NAME_LEN: usize = 2;

/// Body of `POST /sessions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /users`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub display_name: String,
    pub password: String,
    pub password_confirm: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.password != self.password_confirm {
            return Err(ApiError::Invalid("Passwords do not match.".to_string()));
        }
        if self.display_name.trim().chars().count() < MIN_NAME_LEN {
            return Err(ApiError::Invalid(
                "Display name must be at least 2 characters.".to_string(),
            ));
        }
        if self.username.trim().chars().count() < MIN_NAME_LEN {
            return Err(ApiError::Invalid(
                "Username must be at least 2 characters.".to_string(),
            ));
        }
        Ok(())
    }
}

/// Body of `PATCH /users/me`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl UserUpdate {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(name) = &self.display_name {
            if name.trim().chars().count() < MIN_NAME_LEN {
                return Err(ApiError::Invalid(
                    "Display name must be at least 2 characters.".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Body of `POST /posts`.
///
/// Exactly one of `project`/`event`/`club`/`misc` is keyed by the post's
/// category and carries the selected activity id; the others are `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub text: String,
    pub project: Option<i64>,
    pub event: Option<i64>,
    pub club: Option<i64>,
    pub misc: Option<i64>,
    #[serde(rename = "contentType")]
    pub content_type: &'static str,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        category: PostCategory,
        activity: Option<i64>,
    ) -> Self {
        let pick = |c: PostCategory| if c == category { activity } else { None };
        Self {
            title: title.into(),
            text: text.into(),
            project: pick(PostCategory::Project),
            event: pick(PostCategory::Event),
            club: pick(PostCategory::Club),
            misc: pick(PostCategory::Misc),
            content_type: "TEXT",
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.trim().is_empty() && self.text.trim().is_empty() {
            return Err(ApiError::Invalid("A post needs a title or some text.".to_string()));
        }
        Ok(())
    }
}

/// Body of `POST /super`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewActivity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl NewActivity {
    pub fn new(kind: ActivityKind, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            start_time: None,
            end_time: None,
            location: None,
        }
    }

    /// Attach event details. Ignored for projects and clubs; empty values
    /// are dropped.
    pub fn with_event_details(mut self, location: String, start_time: String, end_time: String) -> Self {
        if self.kind == ActivityKind::Event {
            self.location = non_empty(location);
            self.start_time = non_empty(start_time);
            self.end_time = non_empty(end_time);
        }
        self
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Invalid("Activity name is required.".to_string()));
        }
        Ok(())
    }
}

/// Body of `PATCH /super`. Unset fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityUpdate {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl ActivityUpdate {
    pub fn new(id: i64, kind: ActivityKind) -> Self {
        Self {
            id,
            kind,
            name: None,
            description: None,
            active: None,
            location: None,
            start_time: None,
            end_time: None,
        }
    }
}

/// Body of `POST /comments`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewComment {
    pub post: i64,
    pub text: String,
}

impl NewComment {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.text.trim().is_empty() {
            return Err(ApiError::Invalid("A reply cannot be empty.".to_string()));
        }
        Ok(())
    }
}

/// Body of `POST`/`DELETE /likes`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct LikeRequest {
    pub post: i64,
}

/// Parameters of `GET /posts`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostSearch {
    pub search: String,
    pub category: Option<PostCategory>,
}

impl PostSearch {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("search", self.search.trim().to_string()),
            (
                "type",
                self.category.map(|c| c.as_str().to_string()).unwrap_or_default(),
            ),
        ]
    }
}

/// Parameters of `GET /super`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivitySearch {
    pub search: String,
    pub kind: Option<ActivityKind>,
}

impl ActivitySearch {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("search", self.search.trim().to_string()),
            (
                "type",
                self.kind.map(|k| k.as_str().to_string()).unwrap_or_default(),
            ),
        ]
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
