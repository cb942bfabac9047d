use std::fmt;

use nodejs_semver::{Range, Version};

use crate::error::VersionError;

/// Prefix marking a range that resolves to whatever version is released
/// alongside the dependent package.
pub const WORKSPACE_PROTOCOL: &str = "workspace:";

/// A declared dependency range, in npm range syntax.
#[derive(Debug, Clone)]
pub enum VersionConstraint {
    /// `workspace:` range. Never parsed as semver.
    Workspace(String),
    Semver { raw: String, range: Range },
}

impl VersionConstraint {
    /// # Errors
    ///
    /// Returns `VersionError::InvalidRange` if the range is neither a
    /// workspace range nor a valid npm semver range.
    pub fn parse(range: &str) -> Result<Self, VersionError> {
        if range.starts_with(WORKSPACE_PROTOCOL) {
            return Ok(Self::Workspace(range.to_string()));
        }

        Range::parse(range)
            .map(|parsed| Self::Semver {
                raw: range.to_string(),
                range: parsed,
            })
            .map_err(|source| VersionError::InvalidRange {
                range: range.to_string(),
                source,
            })
    }

    #[must_use]
    pub fn is_workspace(&self) -> bool {
        matches!(self, Self::Workspace(_))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Workspace(raw) | Self::Semver { raw, .. } => raw,
        }
    }

    /// Workspace ranges are always satisfied. A version string that does not
    /// parse never satisfies a semver range.
    #[must_use]
    pub fn is_satisfied_by(&self, version: &str) -> bool {
        match self {
            Self::Workspace(_) => true,
            Self::Semver { range, .. } => {
                Version::parse(version).is_ok_and(|v| v.satisfies(range))
            }
        }
    }
}

impl PartialEq for VersionConstraint {
    fn eq(&self, other: &Self) -> bool {
        self.is_workspace() == other.is_workspace() && self.as_str() == other.as_str()
    }
}

impl Eq for VersionConstraint {}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[must_use]
pub fn is_valid_range(range: &str) -> bool {
    VersionConstraint::parse(range).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraint(range: &str) -> VersionConstraint {
        VersionConstraint::parse(range).expect("valid range")
    }

    #[test]
    fn workspace_range_bypasses_semver_parsing() {
        let parsed = constraint("workspace:^");
        assert_eq!(parsed, VersionConstraint::Workspace("workspace:^".to_string()));
        assert!(parsed.is_workspace());
        assert!(is_valid_range("workspace:*"));
        assert!(is_valid_range("workspace:not even semver"));
    }

    #[test]
    fn caret_range_parses() {
        let parsed = constraint("^1.0.0");
        assert!(!parsed.is_workspace());
        assert!(parsed.is_satisfied_by("1.4.2"));
        assert!(!parsed.is_satisfied_by("2.0.0"));
    }

    #[test]
    fn invalid_range_is_rejected() {
        let result = VersionConstraint::parse("not-a-range");
        assert!(matches!(
            result,
            Err(VersionError::InvalidRange { ref range, .. }) if range == "not-a-range"
        ));
        assert!(!is_valid_range("not-a-range"));
    }

    #[test]
    fn or_range_matches_either_side() {
        let parsed = constraint("^1.0.0 || ^2.0.0");
        assert!(parsed.is_satisfied_by("1.3.0"));
        assert!(parsed.is_satisfied_by("2.0.0"));
        assert!(!parsed.is_satisfied_by("3.0.0"));
    }

    #[test]
    fn space_separated_comparators_form_an_intersection() {
        let parsed = constraint(">=1.0.0 <2.0.0");
        assert!(parsed.is_satisfied_by("1.9.9"));
        assert!(!parsed.is_satisfied_by("2.0.0"));
        assert!(!parsed.is_satisfied_by("0.9.0"));
    }

    #[test]
    fn hyphen_range_is_inclusive() {
        let parsed = constraint("1.0.0 - 2.0.0");
        assert!(parsed.is_satisfied_by("1.0.0"));
        assert!(parsed.is_satisfied_by("2.0.0"));
        assert!(!parsed.is_satisfied_by("2.0.1"));
    }

    #[test]
    fn bare_version_is_an_exact_match() {
        let parsed = constraint("1.0.0");
        assert!(parsed.is_satisfied_by("1.0.0"));
        assert!(!parsed.is_satisfied_by("1.0.1"));
    }

    #[test]
    fn tilde_and_wildcard_ranges_parse() {
        assert!(constraint("~0.3").is_satisfied_by("0.3.7"));
        assert!(constraint("1.x").is_satisfied_by("1.8.0"));
        assert!(constraint("*").is_satisfied_by("42.0.0"));
    }

    #[test]
    fn workspace_range_is_always_satisfied() {
        let parsed = constraint("workspace:~");
        assert!(parsed.is_satisfied_by("99.0.0"));
        assert!(parsed.is_satisfied_by("garbage"));
    }

    #[test]
    fn unparseable_version_does_not_satisfy_semver_range() {
        assert!(!constraint("^1").is_satisfied_by("one-point-oh"));
    }

    #[test]
    fn display_keeps_declared_text() {
        assert_eq!(constraint("workspace:^").to_string(), "workspace:^");
        assert_eq!(constraint(">=1.0.0 <2.0.0").to_string(), ">=1.0.0 <2.0.0");
    }
}
