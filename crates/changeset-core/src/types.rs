use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChangesetError;

/// Severity of a package bump. `None` means the package is not released.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BumpType {
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl BumpType {
    /// Releasing severities, most significant first.
    pub const RELEASE_ORDER: [Self; 3] = [Self::Major, Self::Minor, Self::Patch];

    #[must_use]
    pub fn is_release(self) -> bool {
        self != Self::None
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpType {
    type Err = ChangesetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "patch" => Ok(Self::Patch),
            "minor" => Ok(Self::Minor),
            "major" => Ok(Self::Major),
            other => Err(ChangesetError::UnknownBumpType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRelease {
    pub name: String,
    #[serde(rename = "type")]
    pub bump_type: BumpType,
}

impl PackageRelease {
    #[must_use]
    pub fn new(name: impl Into<String>, bump_type: BumpType) -> Self {
        Self {
            name: name.into(),
            bump_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changeset {
    pub id: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    #[serde(default)]
    pub releases: Vec<PackageRelease>,
}

impl Changeset {
    #[must_use]
    pub fn new(id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            commit: None,
            releases: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = Some(commit.into());
        self
    }

    #[must_use]
    pub fn with_release(mut self, name: impl Into<String>, bump_type: BumpType) -> Self {
        self.releases.push(PackageRelease::new(name, bump_type));
        self
    }

    /// Severity this changeset declares for `package`, if it mentions it.
    #[must_use]
    pub fn bump_for(&self, package: &str) -> Option<BumpType> {
        self.releases
            .iter()
            .find(|release| release.name == package)
            .map(|release| release.bump_type)
    }
}
