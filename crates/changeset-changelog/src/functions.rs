use async_trait::async_trait;
use changeset_core::{BumpType, Changeset};

use crate::error::RenderError;
use crate::policy::{
    DependencyRangeInfo, DependentReleaseInfo, PolicyConfig,
    should_update_dependency_based_on_config,
};
use crate::release::ReleasePlanEntry;

/// Options forwarded untouched to the rendering functions.
pub type ChangelogOptions = toml::Table;

/// Pluggable changelog format.
///
/// Renderers may return an empty string to suppress a line.
#[async_trait]
pub trait ChangelogFunctions: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the line cannot be rendered; the whole entry fails.
    async fn get_release_line(
        &self,
        changeset: &Changeset,
        bump_type: BumpType,
        options: &ChangelogOptions,
    ) -> Result<String, RenderError>;

    /// Must return an empty string when `dependent_releases` is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the line cannot be rendered; the whole entry fails.
    async fn get_dependency_release_line(
        &self,
        changesets: &[&Changeset],
        dependent_releases: &[&ReleasePlanEntry],
        options: &ChangelogOptions,
    ) -> Result<String, RenderError>;

    fn should_update_dependency(
        &self,
        release: DependentReleaseInfo<'_>,
        range: DependencyRangeInfo<'_>,
        policy: &PolicyConfig,
    ) -> bool {
        should_update_dependency_based_on_config(release, range, policy)
    }
}

/// The stock changesets format: one bullet per changeset, commit first.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultChangelogFunctions;

#[async_trait]
impl ChangelogFunctions for DefaultChangelogFunctions {
    async fn get_release_line(
        &self,
        changeset: &Changeset,
        _bump_type: BumpType,
        _options: &ChangelogOptions,
    ) -> Result<String, RenderError> {
        let mut lines = changeset.summary.split('\n').map(str::trim_end);
        let first_line = lines.next().unwrap_or_default();

        let mut output = String::from("- ");
        if let Some(commit) = &changeset.commit {
            output.push_str(commit);
            output.push_str(": ");
        }
        output.push_str(first_line);

        for line in lines {
            output.push_str("\n  ");
            output.push_str(line);
        }

        Ok(output)
    }

    async fn get_dependency_release_line(
        &self,
        changesets: &[&Changeset],
        dependent_releases: &[&ReleasePlanEntry],
        _options: &ChangelogOptions,
    ) -> Result<String, RenderError> {
        if dependent_releases.is_empty() {
            return Ok(String::new());
        }

        let changeset_links = changesets.iter().map(|changeset| match &changeset.commit {
            Some(commit) => format!("- Updated dependencies [{commit}]"),
            None => String::from("- Updated dependencies"),
        });
        let updated = dependent_releases
            .iter()
            .map(|release| format!("  - {}@{}", release.name, release.new_version));

        Ok(changeset_links
            .chain(updated)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
