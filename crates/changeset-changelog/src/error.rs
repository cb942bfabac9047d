use std::path::PathBuf;

use thiserror::Error;

/// Error produced by a [`ChangelogFunctions`](crate::ChangelogFunctions)
/// implementation.
pub type RenderError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("failed to render release line for changeset '{changeset_id}'")]
    ReleaseLine {
        changeset_id: String,
        #[source]
        source: RenderError,
    },

    #[error("failed to render dependency release line for '{package}'")]
    DependencyLine {
        package: String,
        #[source]
        source: RenderError,
    },

    #[error("failed to read changelog config at '{path}'")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse changelog config at '{path}'")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
