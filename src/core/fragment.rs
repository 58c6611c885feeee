//! Class fragment loading.
//!
//! Each request carries the [`LoadTicket`] issued when the class was
//! focused. Responses arriving after the user moved on are dropped instead
//! of overwriting the newer content.

use crate::config::CONTENT_REGION_ID;
use crate::core::source::DocumentSource;
use crate::core::view::LoadTicket;
use crate::models::fragment_path;
use crate::utils::dom;

/// What ends up in the content region for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FragmentView {
    /// Fetched documentation markup
    Markup(String),
    /// Server answered with a non-success status
    NotFound { fullname: String },
    /// Transport or read failure
    Failed { fullname: String },
}

impl FragmentView {
    /// Markup to inject.
    pub fn to_html(&self) -> String {
        match self {
            Self::Markup(html) => html.clone(),
            Self::NotFound { fullname } => format!(
                "<div class=\"alert alert-warning\">\
                 <h4>Class Not Found</h4>\
                 <p>Unable to load documentation for {}</p>\
                 </div>",
                escape_html(fullname)
            ),
            Self::Failed { fullname } => format!(
                "<div class=\"alert alert-danger\">\
                 <h4>Error Loading Class</h4>\
                 <p>An error occurred while loading {}</p>\
                 </div>",
                escape_html(fullname)
            ),
        }
    }
}

/// Outcome of [`FragmentLoader::load`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Rendered(FragmentView),
    /// A newer navigation superseded this request; nothing was rendered.
    Stale,
}

/// The single mount point receiving class fragments.
pub trait ContentRegion {
    /// Replace the region's markup.
    fn replace(&self, html: &str);
    /// Re-bind declarative behaviour in the injected markup on the next tick.
    fn activate(&self);
    fn scroll_into_view(&self);
}

/// The `#class-content` element.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomContentRegion;

impl ContentRegion for DomContentRegion {
    fn replace(&self, html: &str) {
        match dom::element_by_id(CONTENT_REGION_ID) {
            Some(region) => region.set_inner_html(html),
            None => dom::log_warn(&format!("Content region #{} not found", CONTENT_REGION_ID)),
        }
    }

    fn activate(&self) {
        wasm_bindgen_futures::spawn_local(async {
            gloo_timers::future::TimeoutFuture::new(0).await;
            if let Some(region) = dom::element_by_id(CONTENT_REGION_ID) {
                dom::bind_toggles(&region);
            }
        });
    }

    fn scroll_into_view(&self) {
        if let Some(region) = dom::element_by_id(CONTENT_REGION_ID) {
            dom::scroll_to_top(&region);
        }
    }
}

/// Fetches class fragments and renders them into a [`ContentRegion`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FragmentLoader<S, R> {
    source: S,
    region: R,
}

impl<S: DocumentSource, R: ContentRegion> FragmentLoader<S, R> {
    pub fn new(source: S, region: R) -> Self {
        Self { source, region }
    }

    /// Fetch the fragment for `ticket` and render it if still current.
    ///
    /// `is_current` is consulted after the fetch resolves.
    pub async fn load(&self, ticket: &LoadTicket, is_current: impl Fn(&LoadTicket) -> bool) -> LoadStatus {
        let fullname = &ticket.entry.fullname;
        let result = self.source.fetch_text(&fragment_path(fullname)).await;

        if !is_current(ticket) {
            dom::log_info(&format!("Discarding stale fragment for {}", fullname));
            return LoadStatus::Stale;
        }

        let view = match result {
            Ok(html) => FragmentView::Markup(html),
            Err(e) if e.is_http_status() => FragmentView::NotFound {
                fullname: fullname.clone(),
            },
            Err(e) => {
                dom::log_error(&format!("Failed to load class content for {}: {}", fullname, e));
                FragmentView::Failed {
                    fullname: fullname.clone(),
                }
            }
        };

        self.region.replace(&view.to_html());
        if matches!(view, FragmentView::Markup(_)) {
            self.region.activate();
            self.region.scroll_into_view();
        }

        LoadStatus::Rendered(view)
    }
}

/// Escape text for inclusion in HTML.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
