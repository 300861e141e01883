use serde::{Deserialize, Serialize};

/// A reply under a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub text: Option<String>,
    /// Author's user id.
    #[serde(default)]
    pub user: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Comment {
    /// Name to show for the author: display name, else username.
    pub fn author_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.username.as_deref())
            .unwrap_or("")
    }

    pub fn initials(&self) -> String {
        super::user::initials(self.author_name())
    }

    /// Author's username, when the backend sent a usable one.
    pub fn author_username(&self) -> Option<&str> {
        self.username.as_deref().filter(|name| !name.is_empty())
    }
}
