//! `/super`: projects, clubs and events.

use std::collections::HashMap;

use reqwest::Method;
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Activity, ActivityKind};
use crate::requests::{ActivitySearch, ActivityUpdate, NewActivity};

#[derive(Deserialize)]
struct SuperData {
    #[serde(rename = "super")]
    activity: Activity,
}

/// Search results arrive under `activities`, or under the plural of the
/// requested type (`projects`, `clubs`, `events`).
fn take_results(mut data: HashMap<String, Vec<Activity>>, kind: Option<ActivityKind>) -> Vec<Activity> {
    if let Some(list) = data.remove("activities") {
        return list;
    }
    kind.and_then(|k| data.remove(&format!("{}s", k.as_str())))
        .unwrap_or_default()
}

impl ApiClient {
    pub async fn search_activities(&self, search: &ActivitySearch) -> Result<Vec<Activity>, ApiError> {
        let data: HashMap<String, Vec<Activity>> = self
            .get(&["super"], &search.query())
            .await?
            .data_or_default();
        Ok(take_results(data, search.kind))
    }

    /// A single activity by id.
    pub async fn activity(&self, id: i64) -> Result<Activity, ApiError> {
        let data: SuperData = self
            .get(&["super", &id.to_string()], &[])
            .await?
            .into_data()?;
        Ok(data.activity)
    }

    pub async fn create_activity(&self, activity: &NewActivity) -> Result<Activity, ApiError> {
        activity.validate()?;
        let created: Activity = self
            .send_json(Method::POST, &["super"], activity)
            .await?
            .into_data()?;
        tracing::info!(id = created.id(), kind = %created.kind(), "activity created");
        Ok(created)
    }

    pub async fn update_activity(&self, update: &ActivityUpdate) -> Result<Activity, ApiError> {
        self.send_json(Method::PATCH, &["super"], update)
            .await?
            .into_data()
    }

    /// Activities led by `username`.
    pub async fn user_activities(&self, username: &str) -> Result<Vec<Activity>, ApiError> {
        Ok(self
            .get(&["super", "user", username], &[])
            .await?
            .data_or_default())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::extract::{Path, Query};
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use crate::client::test_support::client_for;
    use crate::models::{Activity, ActivityKind};
    use crate::requests::{ActivitySearch, ActivityUpdate, NewActivity};

    fn project(id: i64, name: &str) -> Value {
        json!({"id": id, "type": "project", "name": name, "active": true, "leader": 1})
    }

    async fn search(Query(q): Query<HashMap<String, String>>) -> Json<Value> {
        match q.get("type").map(String::as_str) {
            // Typed searches come back keyed by the plural
            Some("project") => Json(json!({"data": {"projects": [project(1, "Robot")]}})),
            Some("club") => Json(json!({"detail": "Nothing"})),
            _ => Json(json!({"data": {"activities": [
                project(2, "Any"),
                {"id": 3, "type": "club", "name": "Chess"},
            ]}})),
        }
    }

    async fn by_id(Path(id): Path<i64>) -> (StatusCode, Json<Value>) {
        if id == 404 {
            return (StatusCode::NOT_FOUND, Json(json!({"detail": "Super not found"})));
        }
        (StatusCode::OK, Json(json!({"data": {"super": project(id, "Robot")}})))
    }

    async fn create(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        let mut created = body.clone();
        created["id"] = json!(11);
        (StatusCode::CREATED, Json(json!({"data": created})))
    }

    async fn edit(Json(body): Json<Value>) -> Json<Value> {
        Json(json!({"data": {
            "id": body["id"],
            "type": body["type"],
            "name": "Robot",
            "active": body["active"],
        }}))
    }

    async fn by_user(Path(name): Path<String>) -> Json<Value> {
        if name == "new" {
            return Json(json!({"detail": "Successfully created Super"}));
        }
        Json(json!({"data": [project(1, "Robot")]}))
    }

    fn router() -> Router {
        Router::new()
            .route("/api/super", get(search).post(create).patch(edit))
            .route("/api/super/{id}", get(by_id))
            .route("/api/super/user/{name}", get(by_user))
    }

    #[tokio::test]
    async fn test_search_reads_activities_key() {
        let client = client_for(router()).await;
        let found = client.search_activities(&ActivitySearch::default()).await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].kind(), ActivityKind::Club);
    }

    #[tokio::test]
    async fn test_search_reads_plural_type_key() {
        let client = client_for(router()).await;
        let search = ActivitySearch {
            search: "rob".to_string(),
            kind: Some(ActivityKind::Project),
        };
        let found = client.search_activities(&search).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "Robot");

        let clubs = ActivitySearch {
            search: String::new(),
            kind: Some(ActivityKind::Club),
        };
        assert!(client.search_activities(&clubs).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_activity_by_id() {
        let client = client_for(router()).await;
        let activity = client.activity(4).await.unwrap();
        assert_eq!(activity.id(), 4);
        let err = client.activity(404).await.unwrap_err();
        assert_eq!(err.user_message("fallback"), "Super not found");
    }

    #[tokio::test]
    async fn test_create_event() {
        let client = client_for(router()).await;
        let event = NewActivity::new(ActivityKind::Event, "Demo night", "Show things")
            .with_event_details(
                "Room 101".to_string(),
                "2025-03-01T18:00".to_string(),
                "2025-03-01T20:00".to_string(),
            );
        let created = client.create_activity(&event).await.unwrap();
        assert_eq!(created.id(), 11);
        match created {
            Activity::Event { location, .. } => assert_eq!(location.as_deref(), Some("Room 101")),
            other => panic!("expected an event, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_activity() {
        let client = client_for(router()).await;
        let mut update = ActivityUpdate::new(4, ActivityKind::Project);
        update.active = Some(false);
        let edited = client.update_activity(&update).await.unwrap();
        assert!(matches!(edited, Activity::Project { active: false, .. }));
    }

    #[tokio::test]
    async fn test_user_activities_default_empty() {
        let client = client_for(router()).await;
        assert_eq!(client.user_activities("jdoe").await.unwrap().len(), 1);
        assert!(client.user_activities("new").await.unwrap().is_empty());
    }
}
