use changeset_core::BumpType;
use changeset_version::VersionConstraint;
use serde::Deserialize;

use crate::release::DependencyType;

/// Minimum dependency bump that is worth mentioning in a dependent's
/// changelog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InternalDependencyBump {
    #[default]
    Patch,
    Minor,
}

impl InternalDependencyBump {
    #[must_use]
    pub fn as_bump_type(self) -> BumpType {
        match self {
            Self::Patch => BumpType::Patch,
            Self::Minor => BumpType::Minor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PolicyConfig {
    pub update_internal_dependencies: InternalDependencyBump,
    pub only_update_peer_dependents_when_out_of_range: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct DependentReleaseInfo<'a> {
    pub bump_type: BumpType,
    pub version: &'a str,
}

#[derive(Debug, Clone, Copy)]
pub struct DependencyRangeInfo<'a> {
    pub range: &'a VersionConstraint,
    pub dependency_type: DependencyType,
}

/// Decides whether a dependency's release is reported in the changelog of a
/// package that depends on it.
///
/// The release must reach `update_internal_dependencies`. Peer dependencies
/// under `only_update_peer_dependents_when_out_of_range` are additionally
/// required to leave their declared range; workspace ranges skip that check.
#[must_use]
pub fn should_update_dependency_based_on_config(
    release: DependentReleaseInfo<'_>,
    range: DependencyRangeInfo<'_>,
    policy: &PolicyConfig,
) -> bool {
    if release.bump_type < policy.update_internal_dependencies.as_bump_type() {
        return false;
    }

    if range.dependency_type == DependencyType::PeerDependencies
        && policy.only_update_peer_dependents_when_out_of_range
        && !range.range.is_workspace()
    {
        return !range.range.is_satisfied_by(release.version);
    }

    true
}
