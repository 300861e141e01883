//! `/posts`: the feed, single posts and authoring.

use reqwest::Method;
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Post;
use crate::requests::{NewPost, PostSearch};

#[derive(Deserialize, Default)]
struct PostsData {
    #[serde(default)]
    posts: Vec<Post>,
}

#[derive(Deserialize)]
struct PostData {
    post: Post,
}

impl ApiClient {
    /// Search the feed. An empty search lists recent posts.
    pub async fn posts(&self, search: &PostSearch) -> Result<Vec<Post>, ApiError> {
        let data: PostsData = self
            .get(&["posts"], &search.query())
            .await?
            .data_or_default();
        Ok(data.posts)
    }

    pub async fn post(&self, id: i64) -> Result<Post, ApiError> {
        let data: PostData = self
            .get(&["posts", &id.to_string()], &[])
            .await?
            .into_data()?;
        Ok(data.post)
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<(), ApiError> {
        post.validate()?;
        self.send_json::<_, serde_json::Value>(Method::POST, &["posts"], post)
            .await?;
        tracing::info!(title = %post.title, "post created");
        Ok(())
    }

    /// Posts written by `username`, newest first as the backend orders them.
    pub async fn user_posts(&self, username: &str) -> Result<Vec<Post>, ApiError> {
        Ok(self
            .get(&["posts", "user", username], &[])
            .await?
            .data_or_default())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use crate::client::test_support::client_for;
    use crate::models::PostCategory;
    use crate::requests::{NewPost, PostSearch};

    type Seen = Arc<Mutex<Vec<Value>>>;

    fn post(id: i64) -> Value {
        json!({
            "id": id,
            "title": "Robot demo",
            "text": "Come see it",
            "username": "jdoe",
            "display_name": "Jane",
            "contentType": "TEXT",
            "liked": true,
            "like_number": 4,
            "project": {"id": 2, "name": "Robot"},
        })
    }

    async fn list(Query(q): Query<HashMap<String, String>>) -> Json<Value> {
        if q.get("search").map(String::as_str) == Some("none") {
            return Json(json!({"detail": "Get posts successful"}));
        }
        Json(json!({"data": {"posts": [post(1), post(2)]}}))
    }

    async fn create(State(seen): State<Seen>, Json(body): Json<Value>) -> StatusCode {
        seen.lock().unwrap().push(body);
        StatusCode::CREATED
    }

    async fn one(Path(id): Path<i64>) -> Json<Value> {
        Json(json!({"data": {"post": post(id)}}))
    }

    async fn by_user(Path(name): Path<String>) -> Json<Value> {
        if name == "quiet" {
            return Json(json!({"detail": "ok"}));
        }
        Json(json!({"data": [post(7)]}))
    }

    fn router(seen: Seen) -> Router {
        Router::new()
            .route("/api/posts", get(list).post(create))
            .route("/api/posts/{id}", get(one))
            .route("/api/posts/user/{name}", get(by_user))
            .with_state(seen)
    }

    #[tokio::test]
    async fn test_posts_feed() {
        let client = client_for(router(Seen::default())).await;
        let posts = client.posts(&PostSearch::default()).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].category(), (PostCategory::Project, "Robot"));
        assert!(posts[0].liked);

        let none = PostSearch {
            search: "none".to_string(),
            category: None,
        };
        assert!(client.posts(&none).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_single_post() {
        let client = client_for(router(Seen::default())).await;
        let post = client.post(12).await.unwrap();
        assert_eq!(post.id, 12);
        assert_eq!(post.like_number, 4);
    }

    #[tokio::test]
    async fn test_create_post_sends_body() {
        let seen = Seen::default();
        let client = client_for(router(seen.clone())).await;
        let new = NewPost::new("Hello", "World", PostCategory::Event, Some(5));
        client.create_post(&new).await.unwrap();

        let bodies = seen.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["event"], 5);
        assert_eq!(bodies[0]["club"], Value::Null);
        assert_eq!(bodies[0]["contentType"], "TEXT");
    }

    #[tokio::test]
    async fn test_user_posts_absent_data_is_empty() {
        let client = client_for(router(Seen::default())).await;
        assert_eq!(client.user_posts("jdoe").await.unwrap()[0].id, 7);
        assert!(client.user_posts("quiet").await.unwrap().is_empty());
    }
}
