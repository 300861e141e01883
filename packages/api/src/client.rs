//! # The fetch wrapper
//!
//! [`ApiClient`] centralises every call to the backend:
//!
//! - endpoint URLs are `<origin><prefix>/<segments...>` with each segment
//!   percent-encoded (usernames go straight into paths),
//! - each request carries the CSRF header, set to the current cookie value or
//!   the empty string,
//! - success is decided by the status code alone; a non-2xx response becomes
//!   [`ApiError::Status`] with whatever `detail` the body carried,
//! - bodies are decoded as an [`Envelope`], where either key may be missing.
//!
//! The client is cheap to clone and is shared through the UI context.

use std::fmt;
use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::config::ApiConfig;
use store::ClientConfig;

#[cfg(target_arch = "wasm32")]
use crate::csrf::DocumentCookies;
#[cfg(not(target_arch = "wasm32"))]
use crate::csrf::StaticCookies;
use crate::csrf::{cookie_value, CookieSource};
use crate::error::{ApiError, Detail};

/// Origin assumed when neither the browser nor the config provides one.
const DEFAULT_ORIGIN: &str = "http://localhost:8080";

/// The backend's response wrapper: `{"detail": ..., "data": ...}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub detail: Option<Detail>,
    pub data: Option<T>,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode a response body. An empty body is an empty envelope.
    pub fn parse(body: &str) -> Result<Self, ApiError> {
        if body.trim().is_empty() {
            return Ok(Self {
                detail: None,
                data: None,
            });
        }
        Ok(serde_json::from_str(body)?)
    }

    /// The payload, which the caller requires to be present.
    pub fn into_data(self) -> Result<T, ApiError> {
        self.data
            .ok_or_else(|| ApiError::Decode("response has no data".to_string()))
    }
}

impl<T: DeserializeOwned + Default> Envelope<T> {
    /// The payload, or its default when the backend left it out (it drops
    /// empty lists and objects).
    pub fn data_or_default(self) -> T {
        self.data.unwrap_or_default()
    }
}

/// HTTP client for the REST API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    csrf_cookie: String,
    csrf_header: String,
    cookies: Arc<dyn CookieSource>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.base)
            .field("csrf_cookie", &self.csrf_cookie)
            .field("csrf_header", &self.csrf_header)
            .finish()
    }
}

impl ApiClient {
    /// Create a client for the API served at `origin` (e.g. `http://host:8080`).
    pub fn new(origin: &str, config: &ApiConfig, cookies: Arc<dyn CookieSource>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: format!("{}{}", origin.trim_end_matches('/'), config.prefix),
            csrf_cookie: config.csrf_cookie.clone(),
            csrf_header: config.csrf_header.clone(),
            cookies,
        }
    }

    /// Create the platform-appropriate client.
    ///
    /// In the browser the origin comes from `window.location` and the CSRF
    /// token from `document.cookie`. Elsewhere the configured origin is used
    /// and there is no cookie.
    pub fn from_config(config: &ClientConfig) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let origin = web_sys::window()
                .and_then(|window| window.location().origin().ok())
                .or_else(|| config.api.origin.clone())
                .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
            Self::new(&origin, &config.api, Arc::new(DocumentCookies))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let origin = config
                .api
                .origin
                .clone()
                .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
            Self::new(&origin, &config.api, Arc::new(StaticCookies::default()))
        }
    }

    /// Base URL every endpoint hangs off, e.g. `http://host:8080/api`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The CSRF token to send right now (empty when there is no cookie).
    pub fn csrf_token(&self) -> String {
        cookie_value(&self.cookies.cookies(), &self.csrf_cookie).unwrap_or_default()
    }

    /// Build the URL for an endpoint from its path segments.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base).map_err(|e| ApiError::Url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Url(self.base.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn build(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!(%method, %url, "api request");
        self.http
            .request(method, url)
            .header(self.csrf_header.as_str(), self.csrf_token())
            .header(CONTENT_TYPE, "application/json")
    }

    /// Send a request and decode the envelope, failing on non-2xx.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Envelope<T>, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().clone();
        let body = response.text().await?;

        if !status.is_success() {
            let detail = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| Detail::from_failure(envelope.detail, envelope.data));
            tracing::warn!(status = status.as_u16(), %url, "api request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        Envelope::parse(&body)
    }

    /// `GET` with optional query parameters. Empty values are left out.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Envelope<T>, ApiError> {
        let mut request = self.build(Method::GET, self.endpoint(segments)?);
        let query: Vec<&(&str, String)> = query.iter().filter(|(_, v)| !v.is_empty()).collect();
        if !query.is_empty() {
            request = request.query(&query);
        }
        self.send(request).await
    }

    /// A request with a JSON body.
    pub(crate) async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<Envelope<T>, ApiError> {
        let request = self.build(method, self.endpoint(segments)?).json(body);
        self.send(request).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::Router;
    use store::config::ApiConfig;

    use super::ApiClient;
    use crate::csrf::StaticCookies;

    /// Serve `router` on an ephemeral port and return its origin.
    pub async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// A client against `router` with a fixed CSRF cookie.
    pub async fn client_for(router: Router) -> ApiClient {
        let origin = spawn_backend(router).await;
        ApiClient::new(
            &origin,
            &ApiConfig::default(),
            Arc::new(StaticCookies::new("csrftoken=test-token")),
        )
    }
}
