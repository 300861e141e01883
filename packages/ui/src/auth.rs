//! Authentication context and hooks for the UI.
//!
//! The logged-in user is the only global mutable state in the app. It lives
//! in a context signal, starts from whatever the session cache held at load
//! time, and every change is written back to the cache.

use api::{ApiClient, ApiError, User};
use dioxus::prelude::*;

use crate::context::{use_api, use_config};
use crate::make_session;

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Handle over the auth signal with the operations pages need.
#[derive(Clone, Copy, PartialEq)]
pub struct Auth {
    state: Signal<AuthState>,
}

impl Auth {
    /// The logged-in user. Subscribes the caller to changes.
    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.read().is_logged_in()
    }

    /// Record a successful login or registration.
    pub fn login(&mut self, user: User) {
        tracing::debug!(username = %user.username, "session started");
        self.state.set(AuthState { user: Some(user) });
    }

    /// Replace the cached user after an account edit.
    pub fn update(&mut self, user: User) {
        self.state.set(AuthState { user: Some(user) });
    }

    /// End the session on the server, then forget the user.
    ///
    /// The user stays logged in locally when the request fails.
    pub async fn logout(&mut self, api: &ApiClient) -> Result<(), ApiError> {
        let mut state = self.state.peek().clone();
        end_session(api, &mut state).await?;
        self.state.set(state);
        Ok(())
    }
}

/// Clear `state` once the server has ended the session.
async fn end_session(api: &ApiClient, state: &mut AuthState) -> Result<(), ApiError> {
    api.logout().await?;
    *state = AuthState::default();
    Ok(())
}

/// The user to keep after asking the server who is logged in. A rejected
/// session forgets the cached user; any other failure keeps it.
fn revalidated(cached: Option<User>, result: Result<User, ApiError>) -> Option<User> {
    match result {
        Ok(user) => Some(user),
        Err(e) if e.is_unauthorized() => {
            tracing::info!("cached session expired");
            None
        }
        Err(e) => {
            tracing::warn!("could not re-validate session: {e}");
            cached
        }
    }
}

/// Get the auth handle provided by [`AuthProvider`].
pub fn use_auth() -> Auth {
    Auth {
        state: use_context::<Signal<AuthState>>(),
    }
}

/// Provider component that manages authentication state.
///
/// Must sit below the providers of [`store::ClientConfig`] and
/// [`api::ApiClient`].
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_config();
    let api = use_api();
    let session_config = config.session.clone();

    let mut auth_state = use_signal(move || AuthState {
        user: make_session(&session_config).load_user(),
    });

    // Mirror every change into the session cache
    use_effect(move || {
        let user = auth_state.read().user.clone();
        make_session(&config.session).store_user(user.as_ref());
    });

    // Re-validate the cached user against the server on mount
    let _ = use_resource(move || {
        let api = api.clone();
        async move {
            let cached = auth_state.peek().user.clone();
            if cached.is_none() {
                return;
            }
            let user = revalidated(cached, api.current_user().await);
            if auth_state.peek().user != user {
                auth_state.set(AuthState { user });
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}
