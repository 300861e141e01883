//! `/comments`: replies under a post.

use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Comment;
use crate::requests::NewComment;

impl ApiClient {
    /// Replies to `post`, oldest first.
    pub async fn comments(&self, post: i64) -> Result<Vec<Comment>, ApiError> {
        Ok(self
            .get(&["comments"], &[("id", post.to_string())])
            .await?
            .data_or_default())
    }

    pub async fn create_comment(&self, comment: &NewComment) -> Result<(), ApiError> {
        comment.validate()?;
        self.send_json::<_, serde_json::Value>(Method::POST, &["comments"], comment)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use crate::client::test_support::client_for;
    use crate::error::ApiError;
    use crate::requests::NewComment;

    type Stored = Arc<Mutex<Vec<Value>>>;

    async fn list(State(stored): State<Stored>, Query(q): Query<HashMap<String, String>>) -> Json<Value> {
        let post: i64 = q.get("id").and_then(|id| id.parse().ok()).unwrap_or_default();
        let comments: Vec<Value> = stored
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c["post"] == post)
            .enumerate()
            .map(|(i, c)| json!({"id": i + 1, "text": c["text"], "user": 1, "username": "jdoe"}))
            .collect();
        Json(json!({"data": comments}))
    }

    async fn create(State(stored): State<Stored>, Json(body): Json<Value>) -> StatusCode {
        stored.lock().unwrap().push(body);
        StatusCode::CREATED
    }

    fn router(stored: Stored) -> Router {
        Router::new()
            .route("/api/comments", get(list).post(create))
            .with_state(stored)
    }

    #[tokio::test]
    async fn test_comment_round_trip_through_backend() {
        let client = client_for(router(Stored::default())).await;
        assert!(client.comments(4).await.unwrap().is_empty());

        client
            .create_comment(&NewComment {
                post: 4,
                text: "Nice!".to_string(),
            })
            .await
            .unwrap();

        let comments = client.comments(4).await.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].text.as_deref(), Some("Nice!"));
        assert_eq!(comments[0].author_name(), "jdoe");
        assert!(client.comments(5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_comment_not_sent() {
        let stored = Stored::default();
        let client = client_for(router(stored.clone())).await;
        let err = client
            .create_comment(&NewComment {
                post: 4,
                text: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Invalid(_)));
        assert!(stored.lock().unwrap().is_empty());
    }
}
