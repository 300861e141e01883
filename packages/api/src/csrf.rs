//! CSRF token lookup.
//!
//! The backend sets a `csrftoken` cookie and expects its value back in the
//! `X-CSRFToken` header on state-changing requests. The token is read from a
//! [`CookieSource`] each time a request is built, so a token rotated by the
//! previous response (e.g. after login) is picked up immediately.

use std::sync::Mutex;

/// Value of cookie `name` in a `document.cookie`-style string (`"a=1; b=2"`).
///
/// Returns `None` when the cookie is missing or appears more than once.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    let mut matches = cookies
        .split(';')
        .map(str::trim_start)
        .filter_map(|pair| pair.strip_prefix(name)?.strip_prefix('='));
    let value = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    Some(value.to_string())
}

/// Something that can report the current cookie string.
pub trait CookieSource: Send + Sync {
    fn cookies(&self) -> String;
}

/// Reads `document.cookie` from the current page.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookies;

#[cfg(target_arch = "wasm32")]
impl CookieSource for DocumentCookies {
    fn cookies(&self) -> String {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|document| document.cookie().ok())
            .unwrap_or_default()
    }
}

/// A cookie string held in memory, for builds without a browser document.
#[derive(Debug, Default)]
pub struct StaticCookies {
    cookies: Mutex<String>,
}

impl StaticCookies {
    pub fn new(cookies: impl Into<String>) -> Self {
        Self {
            cookies: Mutex::new(cookies.into()),
        }
    }

    /// Replace the cookie string.
    pub fn set(&self, cookies: impl Into<String>) {
        if let Ok(mut current) = self.cookies.lock() {
            *current = cookies.into();
        }
    }
}

impl CookieSource for StaticCookies {
    fn cookies(&self) -> String {
        self.cookies
            .lock()
            .map(|cookies| cookies.clone())
            .unwrap_or_default()
    }
}
