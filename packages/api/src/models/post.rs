use serde::{Deserialize, Serialize};

use super::activity::PostCategory;
use super::comment::Comment;

/// Kind of post body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContentType {
    #[default]
    #[serde(rename = "text", alias = "TEXT")]
    Text,
    #[serde(rename = "image", alias = "IMAGE")]
    Image,
}

/// The activity a post is attached to, as embedded in the post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl ActivityRef {
    fn named(this: &Option<ActivityRef>) -> Option<&str> {
        this.as_ref()?.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// A post in the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(rename = "contentType", default)]
    pub content_type: ContentType,
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Whether the current user has liked this post.
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub like_number: i64,
    #[serde(default)]
    pub club: Option<ActivityRef>,
    #[serde(default)]
    pub project: Option<ActivityRef>,
    #[serde(default)]
    pub event: Option<ActivityRef>,
}

impl Post {
    /// Name to show for the author: display name, else username.
    pub fn author_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }

    pub fn initials(&self) -> String {
        super::user::initials(self.author_name())
    }

    /// Category and badge label. The first named reference wins, checked in
    /// the order club, project, event; otherwise the post is "Misc".
    pub fn category(&self) -> (PostCategory, &str) {
        if let Some(name) = ActivityRef::named(&self.club) {
            (PostCategory::Club, name)
        } else if let Some(name) = ActivityRef::named(&self.project) {
            (PostCategory::Project, name)
        } else if let Some(name) = ActivityRef::named(&self.event) {
            (PostCategory::Event, name)
        } else {
            (PostCategory::Misc, "Misc")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST: &str = r#"{
        "id": 12,
        "title": "Looking for teammates",
        "text": "Anyone up for the hackathon?",
        "username": "amber",
        "display_name": "Amber",
        "image_url": null,
        "contentType": "TEXT",
        "comments": [{"id": 1, "text": "me!", "user": 4}],
        "liked": true,
        "like_number": 3,
        "project": {"id": 4, "name": "HackPath"}
    }"#;

    #[test]
    fn test_decodes_backend_post() {
        let post: Post = serde_json::from_str(POST).unwrap();
        assert_eq!(post.id, 12);
        assert_eq!(post.content_type, ContentType::Text);
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].text.as_deref(), Some("me!"));
        assert!(post.liked);
        assert_eq!(post.like_number, 3);
        assert_eq!(post.author_name(), "Amber");
        assert_eq!(post.initials(), "AM");
        assert_eq!(post.category(), (PostCategory::Project, "HackPath"));
    }

    #[test]
    fn test_minimal_post_defaults() {
        let post: Post = serde_json::from_str(r#"{"id": 1, "username": "bo"}"#).unwrap();
        assert!(!post.liked);
        assert_eq!(post.like_number, 0);
        assert!(post.comments.is_empty());
        assert_eq!(post.content_type, ContentType::Text);
        assert_eq!(post.author_name(), "bo");
        assert_eq!(post.category(), (PostCategory::Misc, "Misc"));
    }

    #[test]
    fn test_category_precedence_and_unnamed_refs() {
        let mut post: Post = serde_json::from_str(r#"{"id": 1, "username": "bo"}"#).unwrap();
        post.event = Some(ActivityRef {
            id: Some(2),
            name: Some("Demo night".to_string()),
        });
        post.club = Some(ActivityRef {
            id: Some(3),
            name: Some("Chess".to_string()),
        });
        assert_eq!(post.category(), (PostCategory::Club, "Chess"));

        // A reference without a name does not count
        post.club = Some(ActivityRef {
            id: Some(3),
            name: None,
        });
        assert_eq!(post.category(), (PostCategory::Event, "Demo night"));
    }

    #[test]
    fn test_image_content_type() {
        let post: Post =
            serde_json::from_str(r#"{"id": 1, "username": "bo", "contentType": "image"}"#).unwrap();
        assert_eq!(post.content_type, ContentType::Image);
    }
}
