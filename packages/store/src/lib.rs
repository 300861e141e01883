//! Client-side persistence and configuration for FORWARD.
//!
//! The only state the client keeps between page loads is the logged-in user,
//! written through a [`SessionStore`]. [`ClientConfig`] carries the handful of
//! knobs (API prefix, CSRF names, layout breakpoint) the other crates share.

pub mod config;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use config::ClientConfig;
pub use session::{SessionCache, SessionStore};
