use changeset_core::Changeset;
use tracing::debug;

use crate::Result;
use crate::collector::{ChangelogLines, collect_direct_changes, push_dependency_line};
use crate::entry::ChangelogEntry;
use crate::format::format_body;
use crate::functions::{ChangelogFunctions, ChangelogOptions};
use crate::policy::PolicyConfig;
use crate::release::ReleasePlanEntry;
use crate::selector::select_dependency_impact;

/// Builds the changelog entry for `release` within the release event
/// described by `releases` and `changesets`.
///
/// Returns `Ok(None)` when the release does not bump the package.
///
/// # Errors
///
/// Returns `ChangelogError::ReleaseLine` or `ChangelogError::DependencyLine`
/// if a rendering function fails.
pub async fn get_changelog_entry<F>(
    release: &ReleasePlanEntry,
    releases: &[ReleasePlanEntry],
    changesets: &[Changeset],
    functions: &F,
    options: &ChangelogOptions,
    policy: &PolicyConfig,
) -> Result<Option<ChangelogEntry>>
where
    F: ChangelogFunctions + ?Sized,
{
    if !release.bump_type.is_release() {
        return Ok(None);
    }

    let mut lines = ChangelogLines::new();
    collect_direct_changes(&mut lines, release, changesets, functions, options);

    let impact = select_dependency_impact(release, releases, changesets, functions, policy);
    debug!(
        package = %release.name,
        dependencies = impact.dependent_releases.len(),
        changesets = impact.relevant_changesets.len(),
        "selected dependency releases"
    );
    push_dependency_line(&mut lines, release, impact, functions, options);

    let sections = lines.resolve().await?;
    let entry = ChangelogEntry::new(&release.new_version, format_body(&sections));

    debug!(
        package = %release.name,
        version = %release.new_version,
        empty = entry.body.is_empty(),
        "generated changelog entry"
    );

    Ok(Some(entry))
}
