mod collector;
mod config;
mod entry;
mod error;
mod format;
mod functions;
mod generate;
mod policy;
mod release;
mod selector;

pub use config::{ChangelogConfig, load_changelog_config};
pub use entry::ChangelogEntry;
pub use error::{ChangelogError, RenderError};
pub use format::{format_body, format_section, section_heading};
pub use functions::{ChangelogFunctions, ChangelogOptions, DefaultChangelogFunctions};
pub use generate::get_changelog_entry;
pub use policy::{
    DependencyRangeInfo, DependentReleaseInfo, InternalDependencyBump, PolicyConfig,
    should_update_dependency_based_on_config,
};
pub use release::{DependencyType, PackageManifest, ReleasePlanEntry};
pub use selector::{DependencyImpact, select_dependency_impact};

pub type Result<T> = std::result::Result<T, ChangelogError>;
