//! Application router component.
//!
//! Handles startup and URL-fragment routing with native hashchange events.
//!
//! # Architecture
//!
//! - **Catalog first**: the fragment is only interpreted once the catalog is loaded
//! - **URL hash drives navigation**: back/forward and deep links go through
//!   [`AppContext::sync_with_url`]
//! - **Layout never re-renders on navigation**: header, sidebar and content
//!   region stay mounted

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::content::MainContent;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Main application router and page layout.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    spawn_local(async move {
        ctx.load_catalog().await;
        // Honor a deep link present at startup
        ctx.sync_with_url();

        #[cfg(target_arch = "wasm32")]
        listen_for_hash_changes(ctx);
    });

    #[cfg(target_arch = "wasm32")]
    listen_for_search_shortcut();

    let collapsed = Signal::derive(move || ctx.view.with(|v| v.sidebar_collapsed));

    view! {
        <div class=css::layout>
            <Header />
            <div class=move || {
                if collapsed.get() {
                    format!("{} {}", css::body, css::bodyCollapsed)
                } else {
                    css::body.to_string()
                }
            }>
                <Sidebar />
                <MainContent />
            </div>
        </div>
    }
}

/// Re-sync on every fragment change (back/forward, edits, our own writes).
#[cfg(target_arch = "wasm32")]
fn listen_for_hash_changes(ctx: AppContext) {
    use wasm_bindgen::JsCast;

    let closure = Closure::wrap(Box::new(move || {
        ctx.sync_with_url();
    }) as Box<dyn Fn()>);

    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
    }

    // Keep the closure alive for the lifetime of the app
    closure.forget();
}

/// `/` and Ctrl/Cmd+K focus the search box.
#[cfg(target_arch = "wasm32")]
fn listen_for_search_shortcut() {
    use wasm_bindgen::JsCast;

    use crate::config::SEARCH_INPUT_ID;
    use crate::core::search::is_focus_shortcut;
    use crate::utils::dom;

    let closure = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
        let modified = ev.ctrl_key() || ev.meta_key();
        // A bare "/" typed into a text field is just text
        let typing = ev
            .target()
            .is_some_and(|t| t.dyn_into::<web_sys::HtmlInputElement>().is_ok());
        if (modified || !typing) && is_focus_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
            ev.prevent_default();
            dom::focus_element(SEARCH_INPUT_ID);
        }
    }) as Box<dyn Fn(web_sys::KeyboardEvent)>);

    if let Some(window) = web_sys::window() {
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
