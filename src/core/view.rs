//! Navigation state machine.
//!
//! [`ViewState`] is the single mutable session object behind the UI. It knows
//! nothing about the URL or the network: [`HashRouter`](super::router::HashRouter)
//! keeps the fragment in sync and [`FragmentLoader`](super::fragment::FragmentLoader)
//! consumes the [`LoadTicket`]s issued here.

use std::collections::BTreeSet;

use crate::models::{ClassEntry, ViewMode};

/// Identity token for one fragment request.
///
/// A response is applied only while its ticket is still current; any later
/// navigation supersedes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub entry: ClassEntry,
}

/// Current view, focus and package tree expansion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub current_view: ViewMode,
    pub current_package: Option<String>,
    pub current_class: Option<ClassEntry>,
    pub expanded_packages: BTreeSet<String>,
    pub package_filter: String,
    pub sidebar_collapsed: bool,
    generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the overview and drop the current focus. Idempotent.
    pub fn show_overview(&mut self) {
        self.current_view = ViewMode::Overview;
        self.current_package = None;
        self.current_class = None;
        self.generation += 1;
    }

    /// Expand or collapse a package in the tree and focus it.
    ///
    /// The view mode is left alone.
    pub fn toggle_package(&mut self, name: &str) {
        if !self.expanded_packages.remove(name) {
            self.expanded_packages.insert(name.to_string());
        }
        self.current_package = Some(name.to_string());
    }

    /// Show a package summary, expanding it in the tree.
    pub fn show_package(&mut self, name: &str) {
        self.current_view = ViewMode::Package;
        self.current_package = Some(name.to_string());
        self.current_class = None;
        self.expanded_packages.insert(name.to_string());
        self.generation += 1;
    }

    /// Focus a class and issue the ticket for loading its fragment.
    ///
    /// Calling this twice with the same entry leaves the same state; only the
    /// ticket generation advances.
    pub fn navigate_to_class(&mut self, entry: &ClassEntry) -> LoadTicket {
        self.current_view = ViewMode::Class;
        self.current_class = Some(entry.clone());
        self.current_package = Some(entry.package.clone());
        self.expanded_packages.insert(entry.package.clone());
        self.generation += 1;

        LoadTicket {
            generation: self.generation,
            entry: entry.clone(),
        }
    }

    /// Whether a fragment response for `ticket` may still be rendered.
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation
            && self.current_view == ViewMode::Class
            && self
                .current_class
                .as_ref()
                .is_some_and(|c| c.fullname == ticket.entry.fullname)
    }

    /// Whether `fullname` is the class currently on display.
    pub fn is_showing_class(&self, fullname: &str) -> bool {
        self.current_view == ViewMode::Class
            && self
                .current_class
                .as_ref()
                .is_some_and(|c| c.fullname == fullname)
    }

    /// Whether `name` is the package summary currently on display.
    pub fn is_showing_package(&self, name: &str) -> bool {
        self.current_view == ViewMode::Package && self.current_package.as_deref() == Some(name)
    }

    pub fn is_expanded(&self, package: &str) -> bool {
        self.expanded_packages.contains(package)
    }

    pub fn set_package_filter(&mut self, filter: &str) {
        self.package_filter = filter.to_string();
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foo() -> ClassEntry {
        ClassEntry::new("pkg.a", "Foo")
    }

    /// State without the internal generation counter.
    fn snapshot(state: &ViewState) -> (ViewMode, Option<String>, Option<ClassEntry>, BTreeSet<String>) {
        (
            state.current_view,
            state.current_package.clone(),
            state.current_class.clone(),
            state.expanded_packages.clone(),
        )
    }

    #[test]
    fn test_initial_state_is_overview() {
        let state = ViewState::new();
        assert_eq!(state.current_view, ViewMode::Overview);
        assert!(state.current_package.is_none());
        assert!(state.current_class.is_none());
        assert!(state.expanded_packages.is_empty());
        assert!(!state.sidebar_collapsed);
    }

    #[test]
    fn test_navigate_to_class_sets_focus_and_expands() {
        let mut state = ViewState::new();
        let ticket = state.navigate_to_class(&foo());

        assert_eq!(state.current_view, ViewMode::Class);
        assert_eq!(state.current_class, Some(foo()));
        assert_eq!(state.current_package.as_deref(), Some("pkg.a"));
        assert!(state.is_expanded("pkg.a"));
        assert_eq!(ticket.entry, foo());
        assert!(state.is_current(&ticket));
    }

    #[test]
    fn test_navigate_to_class_is_idempotent() {
        let mut once = ViewState::new();
        once.toggle_package("other");
        once.navigate_to_class(&foo());

        let mut twice = ViewState::new();
        twice.toggle_package("other");
        twice.navigate_to_class(&foo());
        let second = twice.navigate_to_class(&foo());

        assert_eq!(snapshot(&once), snapshot(&twice));
        assert!(twice.is_current(&second));
    }

    #[test]
    fn test_navigate_never_collapses_package() {
        let mut state = ViewState::new();
        state.toggle_package("pkg.a");
        assert!(state.is_expanded("pkg.a"));
        state.navigate_to_class(&foo());
        assert!(state.is_expanded("pkg.a"));
    }

    #[test]
    fn test_toggle_package_flips_membership_and_focuses() {
        let mut state = ViewState::new();
        state.toggle_package("pkg.a");
        assert!(state.is_expanded("pkg.a"));
        assert_eq!(state.current_package.as_deref(), Some("pkg.a"));

        state.toggle_package("pkg.b");
        state.toggle_package("pkg.a");
        assert!(!state.is_expanded("pkg.a"));
        assert!(state.is_expanded("pkg.b"));
        // Focus follows the last toggle even when collapsing
        assert_eq!(state.current_package.as_deref(), Some("pkg.a"));
        assert_eq!(state.current_view, ViewMode::Overview);
    }

    #[test]
    fn test_show_overview_is_idempotent() {
        let mut state = ViewState::new();
        state.navigate_to_class(&foo());
        state.show_overview();
        let first = snapshot(&state);
        state.show_overview();

        assert_eq!(first, snapshot(&state));
        assert_eq!(state.current_view, ViewMode::Overview);
        assert!(state.current_class.is_none());
        assert!(state.current_package.is_none());
        // Expansion survives
        assert!(state.is_expanded("pkg.a"));
    }

    #[test]
    fn test_show_package() {
        let mut state = ViewState::new();
        state.navigate_to_class(&foo());
        state.show_package("pkg.b");
        assert!(state.is_showing_package("pkg.b"));
        assert!(state.current_class.is_none());
        assert!(state.is_expanded("pkg.b"));
    }

    #[test]
    fn test_superseded_ticket_is_stale() {
        let mut state = ViewState::new();
        let first = state.navigate_to_class(&foo());
        let second = state.navigate_to_class(&ClassEntry::new("pkg.b", "Bar"));
        assert!(!state.is_current(&first));
        assert!(state.is_current(&second));

        // Re-navigating to the same class also supersedes the older request
        let third = state.navigate_to_class(&ClassEntry::new("pkg.b", "Bar"));
        assert!(!state.is_current(&second));
        assert!(state.is_current(&third));

        state.show_overview();
        assert!(!state.is_current(&third));
    }

    #[test]
    fn test_sidebar_and_filter() {
        let mut state = ViewState::new();
        state.toggle_sidebar();
        assert!(state.sidebar_collapsed);
        state.toggle_sidebar();
        assert!(!state.sidebar_collapsed);

        state.set_package_filter("strat");
        assert_eq!(state.package_filter, "strat");
    }
}
