use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChangesetError {
    #[error("unknown bump type '{0}'")]
    UnknownBumpType(String),
}

pub type Result<T> = std::result::Result<T, ChangesetError>;
