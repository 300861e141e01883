//! Development reverse proxy for the REST backend.
//!
//! Every `/api/*` request is replayed against `BACKEND_URL` with its method,
//! query, headers (minus `Host`) and body, and the backend's status, headers
//! and body are relayed back untouched. Cookies, including the CSRF cookie,
//! therefore round-trip as if the backend were same-origin.

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use serde_json::json;

const DEFAULT_BACKEND: &str = "http://localhost:8000";

/// Largest request body forwarded.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("could not read request body: {0}")]
    Body(#[from] axum::Error),
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

#[derive(Clone, Debug)]
pub struct ProxyState {
    client: reqwest::Client,
    backend: String,
}

impl ProxyState {
    pub fn new(backend: impl Into<String>) -> Self {
        let backend: String = backend.into();
        Self {
            client: reqwest::Client::new(),
            backend: backend.trim_end_matches('/').to_string(),
        }
    }

    /// Backend from `BACKEND_URL`, falling back to the local default.
    pub fn from_env() -> Self {
        let backend = std::env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND.to_string());
        Self::new(backend)
    }

    pub fn backend(&self) -> &str {
        &self.backend
    }
}

/// Routes `/api` and everything below it to [`forward`].
pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/api", any(forward))
        .route("/api/{*rest}", any(forward))
        .with_state(state)
}

pub async fn forward(State(state): State<ProxyState>, request: Request) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    match relay(&state, request).await {
        Ok(response) => {
            tracing::debug!(%method, %path, status = response.status().as_u16(), "proxied");
            response
        }
        Err(e) => {
            tracing::error!(%method, %path, "proxy error: {e}");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "detail": format!("Backend unavailable: {e}") })),
            )
                .into_response()
        }
    }
}

/// Headers that describe the hop rather than the message.
fn strip_hop_headers(headers: &mut HeaderMap) {
    for name in [header::CONNECTION, header::TRANSFER_ENCODING, header::UPGRADE] {
        headers.remove(name);
    }
}

async fn relay(state: &ProxyState, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let url = format!("{}{}", state.backend, path_and_query);

    let mut headers = parts.headers;
    headers.remove(header::HOST);
    headers.remove(header::CONTENT_LENGTH);
    strip_hop_headers(&mut headers);

    let body = to_bytes(body, MAX_BODY_BYTES).await?;
    let upstream = state
        .client
        .request(parts.method, url)
        .headers(headers)
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let mut response_headers = upstream.headers().clone();
    strip_hop_headers(&mut response_headers);
    response_headers.remove(header::CONTENT_LENGTH);
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderMap;
    use axum::routing::{get, post};
    use serde_json::Value;

    use super::*;

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn echo(headers: HeaderMap, request: Request) -> Response {
        let uri = request.uri().to_string();
        let body = to_bytes(request.into_body(), 1024).await.unwrap();
        let csrf = headers
            .get("x-csrftoken")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        (
            StatusCode::CREATED,
            [(header::SET_COOKIE, "csrftoken=fresh; Path=/")],
            Json(json!({
                "data": {
                    "uri": uri,
                    "csrf": csrf,
                    "body": String::from_utf8_lossy(&body),
                }
            })),
        )
            .into_response()
    }

    fn backend() -> Router {
        Router::new()
            .route("/api/posts", post(echo))
            .route("/api/users/me", get(echo))
    }

    #[tokio::test]
    async fn test_forwards_request_and_relays_response() {
        let backend = spawn(backend()).await;
        let proxy = spawn(router(ProxyState::new(format!("{backend}/")))).await;

        let response = reqwest::Client::new()
            .post(format!("{proxy}/api/posts?type=club"))
            .header("X-CSRFToken", "abc")
            .header("Content-Type", "application/json")
            .body(r#"{"title":"hi"}"#)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        assert_eq!(
            response.headers().get("set-cookie").unwrap(),
            "csrftoken=fresh; Path=/"
        );
        let json: Value = response.json().await.unwrap();
        assert_eq!(json["data"]["uri"], "/api/posts?type=club");
        assert_eq!(json["data"]["csrf"], "abc");
        assert_eq!(json["data"]["body"], r#"{"title":"hi"}"#);
    }

    #[tokio::test]
    async fn test_backend_status_is_passed_through() {
        let backend = spawn(backend()).await;
        let proxy = spawn(router(ProxyState::new(backend))).await;

        let response = reqwest::get(format!("{proxy}/api/nowhere")).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_bad_gateway() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dead = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let proxy = spawn(router(ProxyState::new(dead))).await;

        let response = reqwest::get(format!("{proxy}/api/users/me")).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);
        let json: Value = response.json().await.unwrap();
        assert!(json["detail"]
            .as_str()
            .unwrap()
            .starts_with("Backend unavailable"));
    }

    #[test]
    fn test_backend_trailing_slash_trimmed() {
        assert_eq!(ProxyState::new("http://b:8000/").backend(), "http://b:8000");
    }
}
