use std::collections::HashSet;

use changeset_core::Changeset;
use changeset_version::VersionConstraint;
use tracing::debug;

use crate::functions::ChangelogFunctions;
use crate::policy::{DependencyRangeInfo, DependentReleaseInfo, PolicyConfig};
use crate::release::ReleasePlanEntry;

/// Dependency releases worth reporting for one package, with the changesets
/// that caused them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyImpact<'a> {
    pub dependent_releases: Vec<&'a ReleasePlanEntry>,
    pub relevant_changesets: Vec<&'a Changeset>,
}

impl DependencyImpact<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dependent_releases.is_empty()
    }
}

/// Scans `releases` for direct dependencies of `release` and keeps those the
/// policy accepts. Undeclared and unparseable ranges are skipped.
pub fn select_dependency_impact<'a, F>(
    release: &ReleasePlanEntry,
    releases: &'a [ReleasePlanEntry],
    changesets: &'a [Changeset],
    functions: &F,
    policy: &PolicyConfig,
) -> DependencyImpact<'a>
where
    F: ChangelogFunctions + ?Sized,
{
    let dependent_releases: Vec<&ReleasePlanEntry> = releases
        .iter()
        .filter(|other| other.name != release.name)
        .filter(|other| is_reportable(release, other, functions, policy))
        .collect();

    let relevant_ids: HashSet<&str> = dependent_releases
        .iter()
        .flat_map(|other| other.changesets.iter().map(String::as_str))
        .collect();

    let relevant_changesets = changesets
        .iter()
        .filter(|changeset| relevant_ids.contains(changeset.id.as_str()))
        .collect();

    DependencyImpact {
        dependent_releases,
        relevant_changesets,
    }
}

fn is_reportable<F>(
    release: &ReleasePlanEntry,
    other: &ReleasePlanEntry,
    functions: &F,
    policy: &PolicyConfig,
) -> bool
where
    F: ChangelogFunctions + ?Sized,
{
    let Some((range, dependency_type)) = release.manifest.dependency_range(&other.name) else {
        return false;
    };

    let constraint = match VersionConstraint::parse(range) {
        Ok(constraint) => constraint,
        Err(error) => {
            debug!(
                package = %release.name,
                dependency = %other.name,
                %error,
                "skipping dependency with invalid range"
            );
            return false;
        }
    };

    let accepted = functions.should_update_dependency(
        DependentReleaseInfo {
            bump_type: other.bump_type,
            version: &other.new_version,
        },
        DependencyRangeInfo {
            range: &constraint,
            dependency_type,
        },
        policy,
    );

    if !accepted {
        debug!(
            package = %release.name,
            dependency = %other.name,
            bump = %other.bump_type,
            range = %constraint,
            "dependency release not reported by policy"
        );
    }

    accepted
}
