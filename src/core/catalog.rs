//! Catalog loading.
//!
//! A failed load is not an error state: the viewer keeps working on an empty
//! catalog and the cause goes to the console. No retry is attempted.

use crate::config::NAVIGATION_URL;
use crate::core::error::FetchError;
use crate::core::source::DocumentSource;
use crate::models::Catalog;
use crate::utils::dom;

/// Fetch and parse the navigation catalog.
pub async fn fetch_catalog<S: DocumentSource>(source: &S) -> Result<Catalog, FetchError> {
    let json = source.fetch_text(NAVIGATION_URL).await?;
    Catalog::from_json(&json).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Load the catalog, degrading to an empty one on any failure.
pub async fn load_catalog<S: DocumentSource>(source: &S) -> Catalog {
    match fetch_catalog(source).await {
        Ok(catalog) => {
            let orphans = catalog.orphaned_classes().len();
            if orphans > 0 {
                dom::log_warn(&format!(
                    "{} catalog entries are not listed under any package",
                    orphans
                ));
            }
            catalog
        }
        Err(e) => {
            dom::log_error(&format!("Failed to load navigation data: {}", e));
            Catalog::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::testing::StaticSource;

    const NAVIGATION: &str = r#"{
        "packages": [
            {"name": "pkg.a", "classes": [{"name": "Foo", "package": "pkg.a", "fullname": "pkg.a.Foo"}], "interfaces": []}
        ],
        "allClasses": [{"name": "Foo", "package": "pkg.a", "fullname": "pkg.a.Foo"}]
    }"#;

    #[tokio::test]
    async fn test_load_catalog() {
        let source = StaticSource::default().with(NAVIGATION_URL, Ok(NAVIGATION));
        let catalog = load_catalog(&source).await;
        assert_eq!(catalog.packages.len(), 1);
        assert!(catalog.find_by_fullname("pkg.a.Foo").is_some());
    }

    #[tokio::test]
    async fn test_missing_catalog_degrades_to_empty() {
        let source = StaticSource::default();
        assert_eq!(
            fetch_catalog(&source).await,
            Err(FetchError::HttpError(404))
        );
        assert!(load_catalog(&source).await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_catalog_degrades_to_empty() {
        let source = StaticSource::default().with(NAVIGATION_URL, Ok("{\"packages\": ["));
        assert!(matches!(
            fetch_catalog(&source).await,
            Err(FetchError::JsonParseError(_))
        ));
        assert!(load_catalog(&source).await.is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_degrades_to_empty() {
        let source = StaticSource::default().with(
            NAVIGATION_URL,
            Err(FetchError::NetworkError("offline".to_string())),
        );
        let catalog = load_catalog(&source).await;
        assert!(catalog.packages.is_empty());
        assert!(catalog.all_classes.is_empty());
    }
}
