//! UI components built with Leptos.
//!
//! - [`router`] - Startup, URL sync and page layout (main entry point)
//! - [`header`] - Brand, search box and theme toggle
//! - [`search`] - Class search with keyboard selection
//! - [`sidebar`] - Filterable package tree
//! - [`content`] - Overview, package summary and class content region
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod content;
pub mod header;
pub mod icons;
pub mod router;
pub mod search;
pub mod sidebar;

pub use router::AppRouter;
