//! Activities ("supers"): projects, clubs and events.
//!
//! The backend stores all three as subclasses of one `Super` record and tags
//! each serialised activity with a `"type"` key. [`Activity`] mirrors that
//! with an internally tagged enum whose variants flatten the shared
//! [`Super`] fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fields shared by every kind of activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Super {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    /// User id of the leader.
    #[serde(default)]
    pub leader: Option<i64>,
    /// User ids following the activity.
    #[serde(default)]
    pub followers: Vec<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A project, club or event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Activity {
    Project {
        #[serde(flatten)]
        info: Super,
        #[serde(default)]
        active: bool,
    },
    Club {
        #[serde(flatten)]
        info: Super,
    },
    Event {
        #[serde(flatten)]
        info: Super,
        /// ISO 8601 start, as sent by the backend.
        #[serde(default)]
        start_time: Option<String>,
        #[serde(default)]
        end_time: Option<String>,
        #[serde(default)]
        location: Option<String>,
        /// Id of the club hosting the event.
        #[serde(default)]
        club_ref: Option<i64>,
    },
}

impl Activity {
    pub fn info(&self) -> &Super {
        match self {
            Activity::Project { info, .. } | Activity::Club { info } | Activity::Event { info, .. } => {
                info
            }
        }
    }

    pub fn id(&self) -> i64 {
        self.info().id
    }

    pub fn kind(&self) -> ActivityKind {
        match self {
            Activity::Project { .. } => ActivityKind::Project,
            Activity::Club { .. } => ActivityKind::Club,
            Activity::Event { .. } => ActivityKind::Event,
        }
    }

    /// Display name; unnamed activities render as an empty string.
    pub fn name(&self) -> &str {
        self.info().name.as_deref().unwrap_or("")
    }
}

/// The three kinds of activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Project,
    Club,
    Event,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [ActivityKind::Project, ActivityKind::Club, ActivityKind::Event];

    /// Wire name, also used as the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Project => "project",
            ActivityKind::Club => "club",
            ActivityKind::Event => "event",
        }
    }

    /// Label for selects and badges.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Project => "Project",
            ActivityKind::Club => "Club",
            ActivityKind::Event => "Event",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project" => Ok(ActivityKind::Project),
            "club" => Ok(ActivityKind::Club),
            "event" => Ok(ActivityKind::Event),
            other => Err(format!("Unknown activity type: {other}")),
        }
    }
}

/// What a post is about: one of the activity kinds, or anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostCategory {
    Project,
    Club,
    Event,
    #[default]
    Misc,
}

impl PostCategory {
    pub const ALL: [PostCategory; 4] = [
        PostCategory::Project,
        PostCategory::Club,
        PostCategory::Event,
        PostCategory::Misc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::Project => "project",
            PostCategory::Club => "club",
            PostCategory::Event => "event",
            PostCategory::Misc => "misc",
        }
    }

    /// Label for selects ("Others" for misc).
    pub fn label(&self) -> &'static str {
        match self {
            PostCategory::Misc => "Others",
            other => other.activity_kind().map(|k| k.label()).unwrap_or("Others"),
        }
    }

    /// The activity kind a post of this category refers to.
    pub fn activity_kind(&self) -> Option<ActivityKind> {
        match self {
            PostCategory::Project => Some(ActivityKind::Project),
            PostCategory::Club => Some(ActivityKind::Club),
            PostCategory::Event => Some(ActivityKind::Event),
            PostCategory::Misc => None,
        }
    }
}

impl From<ActivityKind> for PostCategory {
    fn from(kind: ActivityKind) -> Self {
        match kind {
            ActivityKind::Project => PostCategory::Project,
            ActivityKind::Club => PostCategory::Club,
            ActivityKind::Event => PostCategory::Event,
        }
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "misc" => Ok(PostCategory::Misc),
            other => other.parse::<ActivityKind>().map(PostCategory::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_project() {
        let a: Activity = serde_json::from_str(
            r#"{"id": 4, "name": "HackPath", "leader": 2, "followers": [3, 5],
                "description": "Path to hack!", "links": ["https://hp.dev"], "tags": ["web"],
                "active": true, "type": "project"}"#,
        )
        .unwrap();
        assert_eq!(a.kind(), ActivityKind::Project);
        assert_eq!(a.id(), 4);
        assert_eq!(a.name(), "HackPath");
        assert_eq!(a.info().followers, vec![3, 5]);
        assert_eq!(a.info().tags, vec!["web".to_string()]);
        assert!(matches!(a, Activity::Project { active: true, .. }));
    }

    #[test]
    fn test_decodes_event_with_nulls() {
        let a: Activity = serde_json::from_str(
            r#"{"id": 9, "name": null, "leader": null, "description": null,
                "start_time": "2025-03-01T18:00:00+00:00", "end_time": "2025-03-01T20:00:00+00:00",
                "location": null, "club_ref": 1, "type": "event"}"#,
        )
        .unwrap();
        assert_eq!(a.name(), "");
        assert!(a.info().links.is_empty());
        match a {
            Activity::Event {
                start_time,
                location,
                club_ref,
                ..
            } => {
                assert_eq!(start_time.as_deref(), Some("2025-03-01T18:00:00+00:00"));
                assert!(location.is_none());
                assert_eq!(club_ref, Some(1));
            }
            other => panic!("expected event, got {other:?}"),
        }
    }

    #[test]
    fn test_club_minimal() {
        let a: Activity = serde_json::from_str(r#"{"id": 1, "type": "club"}"#).unwrap();
        assert_eq!(a.kind(), ActivityKind::Club);
        assert!(a.info().name.is_none());
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        assert!(serde_json::from_str::<Activity>(r#"{"id": 1, "type": "lesson"}"#).is_err());
    }

    #[test]
    fn test_kind_and_category_parsing() {
        assert_eq!("event".parse::<ActivityKind>(), Ok(ActivityKind::Event));
        assert!("misc".parse::<ActivityKind>().is_err());
        assert_eq!("misc".parse::<PostCategory>(), Ok(PostCategory::Misc));
        assert_eq!("club".parse::<PostCategory>(), Ok(PostCategory::Club));
        assert_eq!(PostCategory::default(), PostCategory::Misc);
        assert_eq!(PostCategory::Misc.label(), "Others");
        assert_eq!(PostCategory::Project.label(), "Project");
        assert_eq!(PostCategory::Misc.activity_kind(), None);
    }
}
