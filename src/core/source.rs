//! Where static documents come from.

use crate::core::error::FetchError;
use crate::utils::fetch_text;

/// Fetches a static document by relative path.
pub trait DocumentSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;
}

/// The site's own origin, via the Fetch API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSource;

impl DocumentSource for HttpSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        fetch_text(path).await
    }
}
