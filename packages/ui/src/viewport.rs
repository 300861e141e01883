//! Window size tracking for switching between the desktop and mobile chrome.

use dioxus::prelude::*;
use store::ClientConfig;

use crate::context::use_config;

/// Inner size of the browser window, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

/// Server-side renders assume a desktop window.
impl Default for WindowDimensions {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

pub fn is_desktop(dimensions: &WindowDimensions, config: &ClientConfig) -> bool {
    config.is_desktop(dimensions.width)
}

#[cfg(target_arch = "wasm32")]
fn current_dimensions() -> WindowDimensions {
    let Some(window) = web_sys::window() else {
        return WindowDimensions::default();
    };
    let px = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as u32
    };
    WindowDimensions {
        width: px(window.inner_width()),
        height: px(window.inner_height()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn current_dimensions() -> WindowDimensions {
    WindowDimensions::default()
}

/// Current window dimensions, updated on every `resize` event.
pub fn use_client() -> Signal<WindowDimensions> {
    let dimensions = use_signal(current_dimensions);

    #[cfg(target_arch = "wasm32")]
    {
        use std::rc::Rc;
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let listener = use_hook(move || {
            let mut dimensions = dimensions;
            let closure = Closure::<dyn FnMut()>::new(move || dimensions.set(current_dimensions()));
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref::<js_sys::Function>());
            }
            Rc::new(closure)
        });

        use_drop(move || {
            if let Some(window) = web_sys::window() {
                let callback: &wasm_bindgen::JsValue = (*listener).as_ref();
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    callback.unchecked_ref::<js_sys::Function>(),
                );
            }
        });
    }

    dimensions
}

/// Whether the window is currently wider than the desktop breakpoint.
pub fn use_is_desktop() -> bool {
    let config = use_config();
    let dimensions = use_client();
    let desktop = is_desktop(&dimensions.read(), &config);
    desktop
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_exclusive() {
        let config = ClientConfig::default();
        let at = |width| WindowDimensions { width, height: 600 };
        assert!(!is_desktop(&at(375), &config));
        assert!(!is_desktop(&at(1024), &config));
        assert!(is_desktop(&at(1025), &config));
    }

    #[test]
    fn test_custom_breakpoint() {
        let config = ClientConfig::from_toml("[layout]\ndesktop_min_width = 600").unwrap();
        assert!(is_desktop(&WindowDimensions { width: 700, height: 0 }, &config));
    }
}
