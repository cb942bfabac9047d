use changeset_core::{BumpType, Changeset};
use futures::FutureExt;
use futures::future::{BoxFuture, try_join_all};

use crate::error::ChangelogError;
use crate::functions::{ChangelogFunctions, ChangelogOptions};
use crate::release::ReleasePlanEntry;
use crate::selector::DependencyImpact;

pub(crate) type PendingLine<'a> = BoxFuture<'a, Result<String, ChangelogError>>;

/// Pending rendered lines per releasing severity, in
/// [`BumpType::RELEASE_ORDER`].
pub(crate) struct ChangelogLines<'a> {
    buckets: [Vec<PendingLine<'a>>; 3],
}

impl<'a> ChangelogLines<'a> {
    pub(crate) fn new() -> Self {
        Self {
            buckets: [Vec::new(), Vec::new(), Vec::new()],
        }
    }

    fn bucket_mut(&mut self, bump_type: BumpType) -> Option<&mut Vec<PendingLine<'a>>> {
        let index = BumpType::RELEASE_ORDER
            .iter()
            .position(|bucket| *bucket == bump_type)?;
        self.buckets.get_mut(index)
    }

    pub(crate) fn push(&mut self, bump_type: BumpType, line: PendingLine<'a>) {
        if let Some(bucket) = self.bucket_mut(bump_type) {
            bucket.push(line);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self, bump_type: BumpType) -> usize {
        BumpType::RELEASE_ORDER
            .iter()
            .position(|bucket| *bucket == bump_type)
            .map_or(0, |index| self.buckets[index].len())
    }

    /// Awaits every pending line. All buckets are driven together and each
    /// keeps its issue order.
    pub(crate) async fn resolve(self) -> Result<Vec<(BumpType, Vec<String>)>, ChangelogError> {
        let resolved = try_join_all(self.buckets.into_iter().map(try_join_all)).await?;
        Ok(BumpType::RELEASE_ORDER.into_iter().zip(resolved).collect())
    }
}

/// Issues one release-line render per changeset that bumps `release`.
pub(crate) fn collect_direct_changes<'a, F>(
    lines: &mut ChangelogLines<'a>,
    release: &ReleasePlanEntry,
    changesets: &'a [Changeset],
    functions: &'a F,
    options: &'a ChangelogOptions,
) where
    F: ChangelogFunctions + ?Sized,
{
    for changeset in changesets {
        let Some(bump_type) = changeset.bump_for(&release.name) else {
            continue;
        };
        if !bump_type.is_release() {
            continue;
        }

        let line = async move {
            functions
                .get_release_line(changeset, bump_type, options)
                .await
                .map_err(|source| ChangelogError::ReleaseLine {
                    changeset_id: changeset.id.clone(),
                    source,
                })
        };
        lines.push(bump_type, line.boxed());
    }
}

/// Issues the dependency-update render into the patch bucket.
pub(crate) fn push_dependency_line<'a, F>(
    lines: &mut ChangelogLines<'a>,
    release: &ReleasePlanEntry,
    impact: DependencyImpact<'a>,
    functions: &'a F,
    options: &'a ChangelogOptions,
) where
    F: ChangelogFunctions + ?Sized,
{
    let package = release.name.clone();
    let line = async move {
        functions
            .get_dependency_release_line(
                &impact.relevant_changesets,
                &impact.dependent_releases,
                options,
            )
            .await
            .map_err(|source| ChangelogError::DependencyLine { package, source })
    };
    lines.push(BumpType::Patch, line.boxed());
}
