//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Catalog`], [`PackageEntry`], [`ClassEntry`] - The navigation index
//! - [`Route`] - Hash-based deep links
//! - [`ViewMode`], [`Theme`] - View and presentation state

mod catalog;
mod route;
mod view;

pub use catalog::{Catalog, ClassEntry, MemberKind, PackageEntry};
pub use route::{Route, fragment_path};
pub use view::{Theme, ViewMode};
