use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("invalid version range '{range}'")]
    InvalidRange {
        range: String,
        #[source]
        source: nodejs_semver::SemverError,
    },
}
