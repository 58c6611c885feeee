//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.
//! Nothing here panics outside a browser, but the browser-backed functions
//! must only be called on `wasm32`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Storage, Window};

use crate::config::bindings::{BOUND_ATTR, TOGGLE_ATTR};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Look up an element by id.
pub fn element_by_id(id: &str) -> Option<Element> {
    window()?.document()?.get_element_by_id(id)
}

/// Focus an element by id.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(id: &str) -> bool {
    if let Some(element) = element_by_id(id)
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Set an attribute on the document root (`<html>`).
pub fn set_root_attribute(name: &str, value: &str) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute(name, value);
    }
}

/// Smoothly scroll an element to the top of the viewport.
pub fn scroll_to_top(element: &Element) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&opts);
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

// =============================================================================
// Declarative Bindings
// =============================================================================

/// Wire `data-toggle="<id>"` elements under `root` to toggle the `hidden`
/// attribute of their target.
///
/// Bound elements are marked with `data-bound`, so calling this again on the
/// same subtree only binds what was added since. Returns the number of newly
/// bound elements.
pub fn bind_toggles(root: &Element) -> u32 {
    let selector = format!("[{}]:not([{}])", TOGGLE_ATTR, BOUND_ATTR);
    let Ok(nodes) = root.query_selector_all(&selector) else {
        return 0;
    };

    let mut bound = 0;
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(target_id) = element.get_attribute(TOGGLE_ATTR) else {
            continue;
        };

        let closure = Closure::wrap(Box::new(move || {
            if let Some(target) = element_by_id(&target_id) {
                let _ = target.toggle_attribute("hidden");
            }
        }) as Box<dyn Fn()>);

        if element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .is_ok()
        {
            let _ = element.set_attribute(BOUND_ATTR, "");
            bound += 1;
        }

        // Listener lives as long as the element
        closure.forget();
    }
    bound
}

// =============================================================================
// Console Logging
// =============================================================================

/// Log an informational message to the browser console.
pub fn log_info(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Log a warning to the browser console.
pub fn log_warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Log an error to the browser console.
pub fn log_error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}
