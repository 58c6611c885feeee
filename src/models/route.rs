//! Hash-based routing for deep links into the catalog.
//!
//! URL format:
//! - empty hash → overview
//! - `#docbox/strategy/IStrategy` → class `docbox.strategy.IStrategy`
//! - `#docbox/strategy/` → package `docbox.strategy`

/// Application routes encoded in the URL fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Package overview: empty hash
    Overview,
    /// Package summary: `#a/b/` (trailing slash)
    Package {
        /// Dotted package name
        name: String,
    },
    /// Class documentation: `#a/b/C`
    Class {
        /// Dotted class fullname
        fullname: String,
    },
}

impl Route {
    /// Parse a URL hash (with or without the leading '#') into a Route.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');

        if path.is_empty() {
            return Self::Overview;
        }

        if let Some(package) = path.strip_suffix('/') {
            return Self::Package {
                name: path_to_dotted(package),
            };
        }

        Self::Class {
            fullname: path_to_dotted(path),
        }
    }

    /// Convert the Route to a URL hash (without the leading '#').
    pub fn to_hash(&self) -> String {
        match self {
            Self::Overview => String::new(),
            Self::Package { name } => format!("{}/", dotted_to_path(name)),
            Self::Class { fullname } => dotted_to_path(fullname),
        }
    }
}

/// `a.b.C` → `a/b/C`
pub fn dotted_to_path(dotted: &str) -> String {
    dotted.replace('.', "/")
}

/// `a/b/C` → `a.b.C`
pub fn path_to_dotted(path: &str) -> String {
    path.replace('/', ".")
}

/// Relative URL of a class's documentation fragment (`a/b/C.html`).
pub fn fragment_path(fullname: &str) -> String {
    format!("{}.html", dotted_to_path(fullname))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Route::Overview);
        assert_eq!(Route::from_hash("#"), Route::Overview);
        assert_eq!(Route::from_hash("#/"), Route::Overview);
        assert_eq!(
            Route::from_hash("#docbox/strategy/IStrategy"),
            Route::Class {
                fullname: "docbox.strategy.IStrategy".to_string(),
            }
        );
        assert_eq!(
            Route::from_hash("a/b/C"),
            Route::Class {
                fullname: "a.b.C".to_string(),
            }
        );
        assert_eq!(
            Route::from_hash("#pkg/a/"),
            Route::Package {
                name: "pkg.a".to_string(),
            }
        );
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(Route::Overview.to_hash(), "");
        assert_eq!(
            Route::Class {
                fullname: "a.b.C".to_string(),
            }
            .to_hash(),
            "a/b/C"
        );
        assert_eq!(
            Route::Package {
                name: "pkg.a".to_string(),
            }
            .to_hash(),
            "pkg/a/"
        );
    }

    #[test]
    fn test_route_hash_round_trip() {
        for route in [
            Route::Overview,
            Route::Class {
                fullname: "a.b.C".to_string(),
            },
            Route::Class {
                fullname: "TopLevel".to_string(),
            },
            Route::Package {
                name: "a.b".to_string(),
            },
        ] {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }

    #[test]
    fn test_fragment_path() {
        assert_eq!(fragment_path("a.b.C"), "a/b/C.html");
        assert_eq!(fragment_path("Solo"), "Solo.html");
    }
}
