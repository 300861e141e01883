//! Error type shared by every API call.
//!
//! The backend reports failures as `{"detail": ...}` where `detail` is a
//! plain message, a list of messages, or a map of field name to messages
//! (validation errors). [`Detail`] keeps whichever shape arrived and
//! [`Detail::message`] flattens it for display.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Server-provided explanation attached to a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Detail {
    Message(String),
    Messages(Vec<String>),
    Fields(BTreeMap<String, serde_json::Value>),
}

impl Detail {
    /// Human-readable text. Lists and field errors are joined by newlines.
    pub fn message(&self) -> String {
        match self {
            Detail::Message(msg) => msg.clone(),
            Detail::Messages(msgs) => msgs.join("\n"),
            Detail::Fields(fields) => fields
                .values()
                .map(field_messages)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

impl Detail {
    /// Explanation of a failed response. Validation failures may arrive as a
    /// generic `detail` sentence with the per-field messages under `data`;
    /// the field messages win.
    pub fn from_failure(detail: Option<Detail>, data: Option<serde_json::Value>) -> Option<Detail> {
        if matches!(detail, Some(Detail::Fields(_))) {
            return detail;
        }
        data.and_then(field_errors).map(Detail::Fields).or(detail)
    }
}

/// `data` as a field error map: every value a message or list of messages.
fn field_errors(data: serde_json::Value) -> Option<BTreeMap<String, serde_json::Value>> {
    let serde_json::Value::Object(map) = data else {
        return None;
    };
    let is_message = |value: &serde_json::Value| match value {
        serde_json::Value::String(_) => true,
        serde_json::Value::Array(items) => {
            !items.is_empty() && items.iter().all(serde_json::Value::is_string)
        }
        _ => false,
    };
    if map.is_empty() || !map.values().all(is_message) {
        return None;
    }
    Some(map.into_iter().collect())
}

fn field_messages(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| match item {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.to_string(),
    }
}

/// Failure of an API call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// The response status was not 2xx.
    #[error("{}", status_message(.status, .detail))]
    Status { status: u16, detail: Option<Detail> },
    /// A 2xx response whose body did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// The endpoint URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(String),
    /// Rejected client-side before anything was sent.
    #[error("{0}")]
    Invalid(String),
}

fn status_message(status: &u16, detail: &Option<Detail>) -> String {
    match detail {
        Some(detail) => detail.message(),
        None => format!("Request failed with status {status}"),
    }
}

impl ApiError {
    /// Text to show the user: the server's detail, a validation message, or
    /// `fallback` when the server gave no explanation.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.message(),
            ApiError::Invalid(msg) => msg.clone(),
            _ => fallback.to_string(),
        }
    }

    /// The session is missing or no longer valid.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
