//! `/likes`: liking and unliking posts.

use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Like;
use crate::requests::LikeRequest;

impl ApiClient {
    pub async fn like(&self, post: i64) -> Result<(), ApiError> {
        self.send_json::<_, serde_json::Value>(Method::POST, &["likes"], &LikeRequest { post })
            .await?;
        Ok(())
    }

    pub async fn unlike(&self, post: i64) -> Result<(), ApiError> {
        self.send_json::<_, serde_json::Value>(Method::DELETE, &["likes"], &LikeRequest { post })
            .await?;
        Ok(())
    }

    /// Likes given by `username`.
    pub async fn user_likes(&self, username: &str) -> Result<Vec<Like>, ApiError> {
        Ok(self
            .get(&["likes", "user", username], &[])
            .await?
            .data_or_default())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use crate::client::test_support::client_for;
    use crate::models::Like;

    type Liked = Arc<Mutex<HashSet<i64>>>;

    async fn like(State(liked): State<Liked>, Json(body): Json<Value>) -> StatusCode {
        let post = body["post"].as_i64().unwrap_or_default();
        if liked.lock().unwrap().insert(post) {
            StatusCode::CREATED
        } else {
            StatusCode::BAD_REQUEST
        }
    }

    async fn unlike(State(liked): State<Liked>, Json(body): Json<Value>) -> StatusCode {
        let post = body["post"].as_i64().unwrap_or_default();
        if liked.lock().unwrap().remove(&post) {
            StatusCode::OK
        } else {
            StatusCode::NOT_FOUND
        }
    }

    async fn by_user(Path(_name): Path<String>) -> Json<Value> {
        Json(json!({"data": [{"user": 1, "post": 3}, {"user": 1, "post": 8}]}))
    }

    fn router(liked: Liked) -> Router {
        Router::new()
            .route("/api/likes", post(like).delete(unlike))
            .route("/api/likes/user/{name}", get(by_user))
            .with_state(liked)
    }

    #[tokio::test]
    async fn test_like_then_unlike() {
        let liked = Liked::default();
        let client = client_for(router(liked.clone())).await;

        client.like(3).await.unwrap();
        assert!(liked.lock().unwrap().contains(&3));
        // Liking twice is a client error the caller sees
        assert_eq!(client.like(3).await.unwrap_err().status(), Some(400));

        client.unlike(3).await.unwrap();
        assert!(liked.lock().unwrap().is_empty());
        assert_eq!(client.unlike(3).await.unwrap_err().status(), Some(404));
    }

    #[tokio::test]
    async fn test_user_likes() {
        let client = client_for(router(Liked::default())).await;
        assert_eq!(
            client.user_likes("jdoe").await.unwrap(),
            vec![Like { user: 1, post: 3 }, Like { user: 1, post: 8 }]
        );
    }
}
