use serde::{Deserialize, Serialize};

/// Two-letter avatar text: the start of `name`, uppercased. An empty name
/// yields blanks so the avatar keeps its size.
pub(crate) fn initials(name: &str) -> String {
    let name = if name.is_empty() { "  " } else { name };
    name.chars().take(2).collect::<String>().to_uppercase()
}

/// A user as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    /// URL of the profile picture, if one was set.
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl User {
    /// Two-letter avatar text for the display name. See [`initials`].
    pub fn initials(&self) -> String {
        initials(&self.display_name)
    }

    /// The picture URL, treating an empty string as no picture.
    pub fn picture(&self) -> Option<&str> {
        self.profile_picture.as_deref().filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(display_name: &str) -> User {
        User {
            id: 1,
            username: "jdoe".to_string(),
            display_name: display_name.to_string(),
            profile_picture: None,
        }
    }

    #[test]
    fn test_decodes_backend_shape() {
        let u: User = serde_json::from_str(
            r#"{"id": 3, "username": "amber", "display_name": "Amber", "profile_picture": null}"#,
        )
        .unwrap();
        assert_eq!(u.id, 3);
        assert_eq!(u.username, "amber");
        assert_eq!(u.display_name, "Amber");
        assert!(u.picture().is_none());
    }

    #[test]
    fn test_initials() {
        assert_eq!(user("jane").initials(), "JA");
        assert_eq!(user("J").initials(), "J");
        assert_eq!(user("émile").initials(), "ÉM");
        assert_eq!(user("").initials(), "  ");
    }

    #[test]
    fn test_empty_picture_is_none() {
        let mut u = user("Jane");
        u.profile_picture = Some(String::new());
        assert!(u.picture().is_none());
        u.profile_picture = Some("https://cdn/x.png".to_string());
        assert_eq!(u.picture(), Some("https://cdn/x.png"));
    }
}
