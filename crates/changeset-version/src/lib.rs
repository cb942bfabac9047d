mod constraint;
mod error;

pub use constraint::{VersionConstraint, WORKSPACE_PROTOCOL, is_valid_range};
pub use error::VersionError;
