//! Root application module.
//!
//! Contains the main App component and the AppContext definition that owns
//! all session state and its mutation entry points.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::config::THEME_ATTRIBUTE;
use crate::core::preferences::{self, LocalStorage};
use crate::core::{
    BrowserLocation, DomContentRegion, FragmentLoader, HashRouter, HttpSource, LoadTicket,
    SearchSession, ViewState, load_catalog,
};
use crate::models::{Catalog, ClassEntry, Theme};
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `use_context::<AppContext>()`. Components never mutate the signals
/// directly; they call the methods below, which route every transition
/// through [`ViewState`], [`HashRouter`] and [`SearchSession`].
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Loaded packages and classes (empty until the load completes).
    pub catalog: RwSignal<Catalog>,
    /// Current view, focus and tree expansion.
    pub view: RwSignal<ViewState>,
    /// Search box state.
    pub search: RwSignal<SearchSession>,
    /// Display theme.
    pub theme: RwSignal<Theme>,
}

impl AppContext {
    /// Creates a new context, reading the stored theme preference.
    pub fn new() -> Self {
        Self {
            catalog: RwSignal::new(Catalog::empty()),
            view: RwSignal::new(ViewState::new()),
            search: RwSignal::new(SearchSession::new()),
            theme: RwSignal::new(preferences::load_theme(&LocalStorage)),
        }
    }

    fn router() -> HashRouter<BrowserLocation> {
        HashRouter::new(BrowserLocation)
    }

    /// Fetch the catalog and swap it in as a whole.
    pub async fn load_catalog(&self) {
        let catalog = load_catalog(&HttpSource).await;
        self.catalog.set(catalog);
    }

    /// Reconcile the view with the current URL fragment.
    pub fn sync_with_url(&self) {
        let ticket = self.catalog.with_untracked(|catalog| {
            self.view
                .try_update(|view| Self::router().handle_url_change(view, catalog))
                .flatten()
        });
        if let Some(ticket) = ticket {
            self.load_fragment(ticket);
        }
    }

    pub fn show_overview(&self) {
        self.view.update(|view| Self::router().show_overview(view));
    }

    pub fn show_package(&self, name: &str) {
        self.view
            .update(|view| Self::router().show_package(view, name));
    }

    pub fn toggle_package(&self, name: &str) {
        self.view.update(|view| view.toggle_package(name));
    }

    pub fn navigate_to_class(&self, entry: &ClassEntry) {
        let ticket = self
            .view
            .try_update(|view| Self::router().navigate_to_class(view, entry));
        if let Some(ticket) = ticket {
            self.load_fragment(ticket);
        }
    }

    pub fn set_package_filter(&self, filter: &str) {
        self.view.update(|view| view.set_package_filter(filter));
    }

    pub fn toggle_sidebar(&self) {
        self.view.update(|view| view.toggle_sidebar());
    }

    // --- Search ---

    pub fn run_search(&self, query: &str) {
        self.catalog.with_untracked(|catalog| {
            self.search.update(|search| search.search(query, catalog));
        });
    }

    pub fn move_selection(&self, direction: i32) {
        self.search.update(|search| search.move_selection(direction));
    }

    pub fn select_result(&self, index: usize) {
        self.search.update(|search| search.select(index));
    }

    /// Navigate to the selected result and reset the search box.
    pub fn commit_search(&self) {
        let entry = self
            .search
            .try_update(|search| search.commit_selection())
            .flatten();
        if let Some(entry) = entry {
            self.navigate_to_class(&entry);
        }
    }

    pub fn clear_search(&self) {
        self.search.update(|search| search.clear());
    }

    // --- Theme ---

    pub fn toggle_theme(&self) {
        let next = preferences::toggle_theme(&LocalStorage, self.theme.get_untracked());
        self.theme.set(next);
    }

    /// Fetch a class fragment; the response is dropped if navigation moved on.
    fn load_fragment(&self, ticket: LoadTicket) {
        let view = self.view;
        spawn_local(async move {
            let loader = FragmentLoader::new(HttpSource, DomContentRegion);
            loader
                .load(&ticket, |t| view.with_untracked(|v| v.is_current(t)))
                .await;
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Mirrors the theme onto the document root
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    Effect::new(move |_| {
        dom::set_root_attribute(THEME_ATTRIBUTE, ctx.theme.get().as_str());
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="fatal">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <details>
                        <summary>"Error details"</summary>
                        <ul>
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                    </details>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
