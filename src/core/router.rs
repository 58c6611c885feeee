//! Bidirectional sync between the URL fragment and [`ViewState`].
//!
//! The fragment is the source of truth for deep links and back/forward
//! navigation; state transitions initiated by the UI write it back. A
//! `hashchange` caused by our own write resolves to what is already on
//! screen and is ignored, so content is never fetched twice for one click.

use crate::core::view::{LoadTicket, ViewState};
use crate::models::{Catalog, ClassEntry, Route};
use crate::utils::dom;

/// Read/write access to the URL fragment (without the leading '#').
pub trait HashLocation {
    fn hash(&self) -> String;
    fn set_hash(&self, hash: &str);
}

/// `window.location.hash`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLocation;

impl HashLocation for BrowserLocation {
    fn hash(&self) -> String {
        dom::get_hash()
    }

    fn set_hash(&self, hash: &str) {
        dom::set_hash(&format!("#{}", hash));
    }
}

/// Hash router driving [`ViewState`] transitions.
#[derive(Clone, Copy, Debug, Default)]
pub struct HashRouter<L> {
    location: L,
}

impl<L: HashLocation> HashRouter<L> {
    pub fn new(location: L) -> Self {
        Self { location }
    }

    /// Reconcile state with the current fragment.
    ///
    /// Returns a ticket when a class fragment has to be fetched. Fragments
    /// that name nothing in the catalog leave the state untouched.
    pub fn handle_url_change(&self, state: &mut ViewState, catalog: &Catalog) -> Option<LoadTicket> {
        match Route::from_hash(&self.location.hash()) {
            Route::Overview => {
                self.show_overview(state);
                None
            }
            Route::Class { fullname } => {
                if state.is_showing_class(&fullname) {
                    return None;
                }
                match catalog.find_by_fullname(&fullname) {
                    Some(entry) => Some(self.navigate_to_class(state, entry)),
                    None => {
                        dom::log_warn(&format!("No class matches deep link '{}'", fullname));
                        None
                    }
                }
            }
            Route::Package { name } => {
                if state.is_showing_package(&name) {
                    return None;
                }
                if catalog.package(&name).is_some() {
                    self.show_package(state, &name);
                } else {
                    dom::log_warn(&format!("No package matches deep link '{}'", name));
                }
                None
            }
        }
    }

    /// Switch to the overview and clear the fragment.
    pub fn show_overview(&self, state: &mut ViewState) {
        state.show_overview();
        self.write(&Route::Overview);
    }

    /// Switch to a package summary and point the fragment at it.
    pub fn show_package(&self, state: &mut ViewState, name: &str) {
        state.show_package(name);
        self.write(&Route::Package {
            name: name.to_string(),
        });
    }

    /// Focus a class, point the fragment at it and hand back the load ticket.
    pub fn navigate_to_class(&self, state: &mut ViewState, entry: &ClassEntry) -> LoadTicket {
        let ticket = state.navigate_to_class(entry);
        self.write(&Route::Class {
            fullname: entry.fullname.clone(),
        });
        ticket
    }

    fn write(&self, route: &Route) {
        let hash = route.to_hash();
        if Route::from_hash(&self.location.hash()) != *route {
            self.location.set_hash(&hash);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::MemoryLocation;
    use super::*;
    use crate::models::{PackageEntry, ViewMode};

    fn catalog() -> Catalog {
        let c = ClassEntry::new("a.b", "C");
        let d = ClassEntry::new("a.b", "D");
        Catalog {
            packages: vec![PackageEntry {
                name: "a.b".to_string(),
                classes: vec![c.clone(), d.clone()],
                interfaces: vec![],
            }],
            all_classes: vec![c, d],
        }
    }

    #[test]
    fn test_navigate_writes_slash_path() {
        let location = MemoryLocation::default();
        let router = HashRouter::new(&location);
        let mut state = ViewState::new();

        router.navigate_to_class(&mut state, &ClassEntry::new("a.b", "C"));
        assert_eq!((&location).hash(), "a/b/C");
    }

    #[test]
    fn test_hash_round_trip_resolves_same_entry() {
        let catalog = catalog();
        let location = MemoryLocation::default();
        let router = HashRouter::new(&location);

        let mut first = ViewState::new();
        let entry = catalog.find_by_fullname("a.b.C").unwrap();
        router.navigate_to_class(&mut first, entry);

        // Fresh session fed the same fragment (deep link)
        let mut second = ViewState::new();
        let ticket = router.handle_url_change(&mut second, &catalog);
        assert_eq!(ticket.map(|t| t.entry), Some(entry.clone()));
        assert_eq!(second.current_class.as_ref(), Some(entry));
    }

    #[test]
    fn test_own_hash_write_does_not_reload() {
        let catalog = catalog();
        let location = MemoryLocation::default();
        let router = HashRouter::new(&location);
        let mut state = ViewState::new();

        let entry = catalog.find_by_fullname("a.b.D").unwrap();
        let ticket = router.navigate_to_class(&mut state, entry);

        // The hashchange listener fires after our own write
        assert!(router.handle_url_change(&mut state, &catalog).is_none());
        assert!(state.is_current(&ticket));
    }

    #[test]
    fn test_back_navigation_loads_previous_class() {
        let catalog = catalog();
        let location = MemoryLocation::default();
        let router = HashRouter::new(&location);
        let mut state = ViewState::new();

        router.navigate_to_class(&mut state, catalog.find_by_fullname("a.b.C").unwrap());
        router.navigate_to_class(&mut state, catalog.find_by_fullname("a.b.D").unwrap());

        location.set_external("#a/b/C");
        let ticket = router.handle_url_change(&mut state, &catalog);
        assert_eq!(ticket.map(|t| t.entry.name), Some("C".to_string()));
        assert!(state.is_showing_class("a.b.C"));
    }

    #[test]
    fn test_unresolvable_fragment_leaves_view_unchanged() {
        let catalog = catalog();
        let location = MemoryLocation::default();
        let router = HashRouter::new(&location);
        let mut state = ViewState::new();
        router.navigate_to_class(&mut state, catalog.find_by_fullname("a.b.C").unwrap());
        let before = state.clone();

        location.set_external("no/such/Class");
        assert!(router.handle_url_change(&mut state, &catalog).is_none());
        assert_eq!(state, before);

        location.set_external("no/such/");
        assert!(router.handle_url_change(&mut state, &catalog).is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_unresolvable_deep_link_on_startup_stays_on_overview() {
        let location = MemoryLocation::with_hash("#no/such/Class");
        let router = HashRouter::new(&location);
        let mut state = ViewState::new();

        assert!(router.handle_url_change(&mut state, &catalog()).is_none());
        assert_eq!(state.current_view, ViewMode::Overview);
        assert_eq!(location.writes.get(), 0);
    }

    #[test]
    fn test_empty_fragment_shows_overview() {
        let catalog = catalog();
        let location = MemoryLocation::default();
        let router = HashRouter::new(&location);
        let mut state = ViewState::new();
        router.navigate_to_class(&mut state, catalog.find_by_fullname("a.b.C").unwrap());

        location.set_external("");
        router.handle_url_change(&mut state, &catalog);
        assert_eq!(state.current_view, ViewMode::Overview);
        assert!(state.current_class.is_none());
    }

    #[test]
    fn test_show_overview_clears_fragment_once() {
        let location = MemoryLocation::with_hash("a/b/C");
        let router = HashRouter::new(&location);
        let mut state = ViewState::new();

        router.show_overview(&mut state);
        assert_eq!((&location).hash(), "");
        assert_eq!(location.writes.get(), 1);

        router.show_overview(&mut state);
        assert_eq!(location.writes.get(), 1);
    }

    #[test]
    fn test_package_route() {
        let catalog = catalog();
        let location = MemoryLocation::default();
        let router = HashRouter::new(&location);
        let mut state = ViewState::new();

        router.show_package(&mut state, "a.b");
        assert_eq!((&location).hash(), "a/b/");
        assert_eq!(state.current_view, ViewMode::Package);

        let mut fresh = ViewState::new();
        assert!(router.handle_url_change(&mut fresh, &catalog).is_none());
        assert!(fresh.is_showing_package("a.b"));
    }
}
