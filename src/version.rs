//! Persisted record format versioning.
//!
//! Every record loader receives the [`FormatVersion`] of the file being
//! read so that older token sets and attribute layouts can be migrated
//! as the schema evolves.

use std::fmt;
use std::str::FromStr;

use crate::error::QbookError;

/// Version of the persisted record format, compared as `major.minor`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FormatVersion {
    major: u16,
    minor: u16,
}

impl FormatVersion {
    /// Create a version from its parts.
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// Major component.
    pub const fn major(self) -> u16 {
        self.major
    }

    /// Minor component.
    pub const fn minor(self) -> u16 {
        self.minor
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for FormatVersion {
    type Err = QbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || QbookError::InvalidVersion { value: s.into() };
        let (major, minor) = s.split_once('.').ok_or_else(invalid)?;
        let major = major.parse().map_err(|_| invalid())?;
        let minor = minor.parse().map_err(|_| invalid())?;
        Ok(Self { major, minor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_major_dot_minor() {
        assert_eq!(FormatVersion::new(14, 6).to_string(), "14.6");
        assert_eq!(FormatVersion::new(1, 0).to_string(), "1.0");
    }

    #[test]
    fn parses_major_dot_minor() {
        let version: FormatVersion = "12.11".parse().unwrap();
        assert_eq!(version.major(), 12);
        assert_eq!(version.minor(), 11);
    }

    #[test]
    fn rejects_missing_separator() {
        let err = "14".parse::<FormatVersion>().unwrap_err();
        assert!(matches!(err, QbookError::InvalidVersion { .. }));
    }

    #[test]
    fn rejects_non_numeric_parts() {
        assert!("a.b".parse::<FormatVersion>().is_err());
        assert!("1.2.3".parse::<FormatVersion>().is_err());
        assert!("".parse::<FormatVersion>().is_err());
    }

    #[test]
    fn orders_by_major_then_minor() {
        assert!(FormatVersion::new(2, 0) > FormatVersion::new(1, 9));
        assert!(FormatVersion::new(1, 2) > FormatVersion::new(1, 1));
        assert_eq!(FormatVersion::new(3, 4), FormatVersion::new(3, 4));
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(FormatVersion::default(), FormatVersion::new(0, 0));
    }

    #[test]
    fn round_trips_through_display() {
        let version = FormatVersion::new(15, 1);
        let parsed: FormatVersion = version.to_string().parse().unwrap();
        assert_eq!(parsed, version);
    }
}
