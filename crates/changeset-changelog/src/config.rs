use std::path::Path;

use serde::Deserialize;

use crate::error::ChangelogError;
use crate::functions::ChangelogOptions;
use crate::policy::{InternalDependencyBump, PolicyConfig};

/// Changelog settings read from `[workspace.metadata.changeset]` or
/// `[package.metadata.changeset]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChangelogConfig {
    #[serde(default)]
    pub update_internal_dependencies: InternalDependencyBump,
    #[serde(default)]
    pub only_update_peer_dependents_when_out_of_range: bool,
    #[serde(default)]
    pub changelog_options: ChangelogOptions,
}

impl ChangelogConfig {
    #[must_use]
    pub fn policy(&self) -> PolicyConfig {
        PolicyConfig {
            update_internal_dependencies: self.update_internal_dependencies,
            only_update_peer_dependents_when_out_of_range: self
                .only_update_peer_dependents_when_out_of_range,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CargoManifest {
    package: Option<ManifestSection>,
    workspace: Option<ManifestSection>,
}

#[derive(Debug, Deserialize)]
struct ManifestSection {
    metadata: Option<Metadata>,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    changeset: Option<ChangelogConfig>,
}

impl ManifestSection {
    fn into_config(self) -> Option<ChangelogConfig> {
        self.metadata.and_then(|metadata| metadata.changeset)
    }
}

/// Reads the changelog settings from a `Cargo.toml`. Workspace metadata
/// takes precedence over package metadata; defaults apply when neither is
/// present.
///
/// # Errors
///
/// Returns `ChangelogError::ConfigRead` if the manifest cannot be read and
/// `ChangelogError::ConfigParse` if it is not valid TOML or has invalid
/// settings.
pub fn load_changelog_config(manifest_path: &Path) -> Result<ChangelogConfig, ChangelogError> {
    let content =
        std::fs::read_to_string(manifest_path).map_err(|source| ChangelogError::ConfigRead {
            path: manifest_path.to_path_buf(),
            source,
        })?;

    let manifest: CargoManifest =
        toml::from_str(&content).map_err(|source| ChangelogError::ConfigParse {
            path: manifest_path.to_path_buf(),
            source,
        })?;

    let config = manifest
        .workspace
        .and_then(ManifestSection::into_config)
        .or_else(|| manifest.package.and_then(ManifestSection::into_config))
        .unwrap_or_default();

    Ok(config)
}
