//! Utility modules for browser and network operations.
//!
//! Provides:
//! - [`dom`] - Window, storage, URL hash, console logging, fragment bindings
//! - [`fetch_text`] - Network fetching with timeout

pub mod dom;
mod fetch;

pub use fetch::fetch_text;
