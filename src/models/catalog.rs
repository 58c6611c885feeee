//! Navigation catalog loaded from `data/navigation.json`.
//!
//! The catalog is read-only once loaded. Packages keep their classes and
//! interfaces in document order; `all_classes` is the flattened list used by
//! search and hash resolution.

use serde::{Deserialize, Serialize};

// =============================================================================
// Entries
// =============================================================================

/// One documented class or interface.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClassEntry {
    /// Simple identifier (e.g., "IStrategy")
    pub name: String,
    /// Dotted package path (e.g., "docbox.strategy")
    pub package: String,
    /// Globally unique `<package>.<name>` identity
    pub fullname: String,
    /// Short description, only used for search matching
    #[serde(default)]
    pub hint: Option<String>,
}

#[cfg(test)]
impl ClassEntry {
    /// Build an entry whose fullname is derived from package and name.
    pub fn new(package: &str, name: &str) -> Self {
        let fullname = if package.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", package, name)
        };
        Self {
            name: name.to_string(),
            package: package.to_string(),
            fullname,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: &str) -> Self {
        self.hint = Some(hint.to_string());
        self
    }
}

/// Whether a package member was listed as a class or an interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberKind {
    Class,
    Interface,
}

/// One package and its members.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PackageEntry {
    /// Dotted package path, unique in the catalog
    pub name: String,
    #[serde(default)]
    pub classes: Vec<ClassEntry>,
    #[serde(default)]
    pub interfaces: Vec<ClassEntry>,
}

impl PackageEntry {
    /// Classes followed by interfaces, each tagged with its kind.
    pub fn members(&self) -> impl Iterator<Item = (MemberKind, &ClassEntry)> {
        self.classes
            .iter()
            .map(|c| (MemberKind::Class, c))
            .chain(self.interfaces.iter().map(|i| (MemberKind::Interface, i)))
    }

    /// Whether the package name or any member name contains `needle`.
    ///
    /// `needle` must already be lowercase.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .members()
                .any(|(_, member)| member.name.to_lowercase().contains(needle))
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The loaded set of packages and classes (the navigation index).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub packages: Vec<PackageEntry>,
    #[serde(default)]
    pub all_classes: Vec<ClassEntry>,
}

impl Catalog {
    /// Empty catalog, used before loading and after a failed load.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the navigation JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty() && self.all_classes.is_empty()
    }

    /// Exact fullname lookup over the flattened class list.
    pub fn find_by_fullname(&self, fullname: &str) -> Option<&ClassEntry> {
        self.all_classes.iter().find(|c| c.fullname == fullname)
    }

    /// Exact package lookup by name.
    pub fn package(&self, name: &str) -> Option<&PackageEntry> {
        self.packages.iter().find(|p| p.name == name)
    }

    /// Packages whose name, or any class/interface name, contains `filter`
    /// case-insensitively. A blank filter returns every package.
    ///
    /// Packages are never reordered and their member lists are untouched.
    pub fn filtered_packages(&self, filter: &str) -> Vec<&PackageEntry> {
        if filter.trim().is_empty() {
            return self.packages.iter().collect();
        }

        let needle = filter.to_lowercase();
        self.packages
            .iter()
            .filter(|p| p.matches_lowercase(&needle))
            .collect()
    }

    /// Flattened entries that no package lists under the same fullname.
    pub fn orphaned_classes(&self) -> Vec<&ClassEntry> {
        self.all_classes
            .iter()
            .filter(|entry| {
                !self
                    .packages
                    .iter()
                    .any(|p| p.members().any(|(_, m)| m.fullname == entry.fullname))
            })
            .collect()
    }
}
