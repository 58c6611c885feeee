//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronDown as ChevronDown, LuChevronRight as ChevronRight, LuComponent as Interface,
        LuFileCode as Class, LuMoon as Moon, LuPackage as Package, LuPanelLeft as Sidebar,
        LuSearch as Search, LuSun as Sun,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxSeam as Package, BsChevronDown as ChevronDown, BsChevronRight as ChevronRight,
        BsDiagram3 as Interface, BsFileEarmarkCode as Class, BsLayoutSidebar as Sidebar,
        BsMoon as Moon, BsSearch as Search, BsSun as Sun,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLASS, Class);
themed_icon!(INTERFACE, Interface);
themed_icon!(PACKAGE, Package);
themed_icon!(SEARCH, Search);
themed_icon!(SIDEBAR, Sidebar);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
