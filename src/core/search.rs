//! Class search over the catalog.
//!
//! Matching is plain case-insensitive containment against a class's name,
//! package, fullname and hint. Results keep catalog order and are capped at
//! [`MAX_SEARCH_RESULTS`].

use crate::config::MAX_SEARCH_RESULTS;
use crate::models::{Catalog, ClassEntry};

/// Entries of `classes` matching `query`, in catalog order.
///
/// A blank query matches nothing.
pub fn search_classes(query: &str, classes: &[ClassEntry]) -> Vec<ClassEntry> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    classes
        .iter()
        .filter(|cls| matches(cls, &needle))
        .take(MAX_SEARCH_RESULTS)
        .cloned()
        .collect()
}

fn matches(cls: &ClassEntry, needle: &str) -> bool {
    cls.name.to_lowercase().contains(needle)
        || cls.package.to_lowercase().contains(needle)
        || cls.fullname.to_lowercase().contains(needle)
        || cls
            .hint
            .as_deref()
            .is_some_and(|hint| hint.to_lowercase().contains(needle))
}

// =============================================================================
// Search Session
// =============================================================================

/// Transient query, results and keyboard selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchSession {
    pub query: String,
    pub results: Vec<ClassEntry>,
    pub selected: usize,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query and recompute results. Selection resets to 0.
    pub fn search(&mut self, query: &str, catalog: &Catalog) {
        self.query = query.to_string();
        self.results = search_classes(query, &catalog.all_classes);
        self.selected = 0;
    }

    /// Move the selection by `direction` (+1 / -1), wrapping at both ends.
    pub fn move_selection(&mut self, direction: i32) {
        let len = self.results.len();
        if len == 0 {
            return;
        }

        let len = len as i64;
        let next = self.selected as i64 + i64::from(direction);
        self.selected = next.rem_euclid(len) as usize;
    }

    /// Select a result directly (mouse hover).
    pub fn select(&mut self, index: usize) {
        if index < self.results.len() {
            self.selected = index;
        }
    }

    /// Take the selected entry as a navigation target and reset the session.
    ///
    /// Returns `None` without touching the session when there are no results.
    pub fn commit_selection(&mut self) -> Option<ClassEntry> {
        let entry = self.results.get(self.selected).cloned()?;
        self.clear();
        Some(entry)
    }

    /// Drop query, results and selection.
    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
        self.selected = 0;
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}

// =============================================================================
// Keyboard Shortcuts
// =============================================================================

/// Action bound to a key pressed inside the search box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchKey {
    Next,
    Previous,
    Commit,
    Dismiss,
}

impl SearchKey {
    /// Map a `KeyboardEvent.key` value to a search action.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Next),
            "ArrowUp" => Some(Self::Previous),
            "Enter" => Some(Self::Commit),
            "Escape" => Some(Self::Dismiss),
            _ => None,
        }
    }
}

/// Whether a global key press should focus the search box (`/`, Ctrl+K, Cmd+K).
pub fn is_focus_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    match key {
        "/" => !ctrl && !meta,
        "k" | "K" => ctrl || meta,
        _ => false,
    }
}
