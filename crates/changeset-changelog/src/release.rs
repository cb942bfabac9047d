use changeset_core::BumpType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyType {
    Dependencies,
    PeerDependencies,
}

/// Dependency declarations of a released package, name to range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
    #[serde(default)]
    pub peer_dependencies: IndexMap<String, String>,
}

impl PackageManifest {
    /// Regular dependencies take precedence over peer dependencies when a
    /// name is declared in both. An empty range counts as undeclared.
    #[must_use]
    pub fn dependency_range(&self, name: &str) -> Option<(&str, DependencyType)> {
        declared_range(&self.dependencies, name)
            .map(|range| (range, DependencyType::Dependencies))
            .or_else(|| {
                declared_range(&self.peer_dependencies, name)
                    .map(|range| (range, DependencyType::PeerDependencies))
            })
    }
}

fn declared_range<'a>(ranges: &'a IndexMap<String, String>, name: &str) -> Option<&'a str> {
    ranges
        .get(name)
        .map(String::as_str)
        .filter(|range| !range.is_empty())
}

/// One package's resolved outcome within a release event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleasePlanEntry {
    pub name: String,
    #[serde(default)]
    pub manifest: PackageManifest,
    pub new_version: String,
    #[serde(rename = "type")]
    pub bump_type: BumpType,
    /// Ids of the changesets that contributed to this release.
    #[serde(default)]
    pub changesets: Vec<String>,
}

impl ReleasePlanEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, bump_type: BumpType, new_version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            manifest: PackageManifest::default(),
            new_version: new_version.into(),
            bump_type,
            changesets: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dependency(mut self, name: impl Into<String>, range: impl Into<String>) -> Self {
        self.manifest.dependencies.insert(name.into(), range.into());
        self
    }

    #[must_use]
    pub fn with_peer_dependency(
        mut self,
        name: impl Into<String>,
        range: impl Into<String>,
    ) -> Self {
        self.manifest
            .peer_dependencies
            .insert(name.into(), range.into());
        self
    }

    #[must_use]
    pub fn with_changesets<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.changesets.extend(ids.into_iter().map(Into::into));
        self
    }
}
