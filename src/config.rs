//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "DocBox";

// =============================================================================
// Network Configuration
// =============================================================================

/// Relative path of the navigation catalog produced by the generator.
pub const NAVIGATION_URL: &str = "data/navigation.json";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Preferences
// =============================================================================

/// localStorage key for the display theme.
pub const THEME_STORAGE_KEY: &str = "docbox-theme";

/// Attribute on the document root mirroring the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

// =============================================================================
// Search Configuration
// =============================================================================

/// Maximum number of search results shown.
pub const MAX_SEARCH_RESULTS: usize = 10;

// =============================================================================
// DOM Configuration
// =============================================================================

/// Element id of the region receiving class fragments.
pub const CONTENT_REGION_ID: &str = "class-content";

/// Element id of the search input (target of the focus shortcut).
pub const SEARCH_INPUT_ID: &str = "docbox-search";

/// Declarative fragment bindings.
pub mod bindings {
    /// Attribute naming the id of the element a click toggles.
    pub const TOGGLE_ATTR: &str = "data-toggle";
    /// Marker set on elements whose behaviour is already bound.
    pub const BOUND_ATTR: &str = "data-bound";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
