//! `/sessions`: logging in and out.

use reqwest::Method;
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::User;
use crate::requests::LoginRequest;

#[derive(Deserialize)]
pub(crate) struct UserData {
    pub user: User,
}

impl ApiClient {
    /// Open a session. The backend sets the session and CSRF cookies.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let data: UserData = self
            .send_json(Method::POST, &["sessions"], &body)
            .await?
            .into_data()?;
        tracing::info!(username = %data.user.username, "logged in");
        Ok(data.user)
    }

    /// End the current session.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_json::<_, serde_json::Value>(Method::DELETE, &["sessions"], &serde_json::json!({}))
            .await?;
        Ok(())
    }
}
