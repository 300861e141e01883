//! `/users`: registration, search, the current user and profiles.

use reqwest::Method;
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::User;
use crate::requests::{RegisterRequest, UserUpdate};
use crate::sessions::UserData;

#[derive(Deserialize, Default)]
struct UsersData {
    #[serde(default)]
    users: Vec<User>,
}

impl ApiClient {
    /// Create an account. The backend logs the new user in.
    ///
    /// The request is validated first; a validation failure never reaches
    /// the network.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        request.validate()?;
        let data: UserData = self
            .send_json(Method::POST, &["users"], request)
            .await?
            .into_data()?;
        tracing::info!(username = %data.user.username, "registered");
        Ok(data.user)
    }

    /// Up to ten users whose username or display name matches `term`.
    pub async fn search_users(&self, term: &str) -> Result<Vec<User>, ApiError> {
        let data: UsersData = self
            .get(&["users"], &[("search", term.trim().to_string())])
            .await?
            .data_or_default();
        Ok(data.users)
    }

    /// The user owning the current session.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let data: UserData = self.get(&["users", "me"], &[]).await?.into_data()?;
        Ok(data.user)
    }

    pub async fn update_current_user(&self, update: &UserUpdate) -> Result<User, ApiError> {
        update.validate()?;
        let data: UserData = self
            .send_json(Method::PATCH, &["users", "me"], update)
            .await?
            .into_data()?;
        Ok(data.user)
    }

    /// A profile by username, or `None` when nobody has that name.
    pub async fn user(&self, username: &str) -> Result<Option<User>, ApiError> {
        let data: Option<serde_json::Value> = self.get(&["users", username], &[]).await?.data;
        match data {
            Some(value) if value.as_object().is_some_and(|o| !o.is_empty()) => {
                Ok(Some(serde_json::from_value(value)?))
            }
            _ => Ok(None),
        }
    }
}
