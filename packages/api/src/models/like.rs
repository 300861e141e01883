use serde::{Deserialize, Serialize};

/// A like: which user liked which post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub user: i64,
    pub post: i64,
}
