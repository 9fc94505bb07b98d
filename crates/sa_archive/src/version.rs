//! Schema versions of archived documents.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

// -----------------------------------------------------------------------------
// SchemaVersion

/// A `major.minor` schema version.
///
/// Versions order by major first, then minor.
///
/// # Examples
///
/// ```
/// use sa_archive::SchemaVersion;
///
/// let v: SchemaVersion = "0.7".parse().unwrap();
/// assert!(v >= SchemaVersion::OLDEST);
/// assert!(v < SchemaVersion::CURRENT);
/// assert_eq!(v.to_string(), "0.7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaVersion {
    major: u16,
    minor: u16,
}

impl SchemaVersion {
    /// The oldest version this engine can read.
    pub const OLDEST: Self = Self::new(0, 5);

    /// The newest version this engine knows, used for writing by default.
    pub const CURRENT: Self = Self::new(0, 11);

    #[inline]
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    #[inline]
    pub const fn major(self) -> u16 {
        self.major
    }

    #[inline]
    pub const fn minor(self) -> u16 {
        self.minor
    }

    /// Whether a document of this version can be read.
    ///
    /// Any minor version of the current major, starting at [`OLDEST`](Self::OLDEST),
    /// is readable. Minor versions newer than [`CURRENT`](Self::CURRENT) only add
    /// content, which is skipped.
    #[inline]
    pub const fn is_readable(self) -> bool {
        self.major == Self::CURRENT.major && self.minor >= Self::OLDEST.minor
    }

    /// Whether a document can be written in this version.
    #[inline]
    pub const fn is_writable(self) -> bool {
        self.is_readable() && self.minor <= Self::CURRENT.minor
    }

    /// Whether this version is newer than anything this engine knows.
    #[inline]
    pub const fn is_newer_than_current(self) -> bool {
        self.major == Self::CURRENT.major && self.minor > Self::CURRENT.minor
    }
}

impl Default for SchemaVersion {
    #[inline]
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Failed to parse a [`SchemaVersion`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid schema version `{0}`")]
pub struct ParseVersionError(pub String);

impl FromStr for SchemaVersion {
    type Err = ParseVersionError;

    /// Accepts `major.minor`, a trailing `.patch` is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseVersionError(s.to_string());
        let mut parts = s.trim().split('.');
        let major = parts.next().ok_or_else(error)?;
        let minor = parts.next().ok_or_else(error)?;

        let major = major.parse::<u16>().map_err(|_| error())?;
        let minor = minor.parse::<u16>().map_err(|_| error())?;

        match parts.next() {
            Some(patch) if patch.parse::<u16>().is_err() => Err(error()),
            _ if parts.next().is_some() => Err(error()),
            _ => Ok(Self::new(major, minor)),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::SchemaVersion;
    use alloc::string::ToString;

    #[test]
    fn parse_and_display() {
        let v: SchemaVersion = "0.11".parse().unwrap();
        assert_eq!(v, SchemaVersion::new(0, 11));
        assert_eq!(v.to_string(), "0.11");

        let v: SchemaVersion = " 0.9.2 ".parse().unwrap();
        assert_eq!(v, SchemaVersion::new(0, 9));

        assert!("0".parse::<SchemaVersion>().is_err());
        assert!("a.b".parse::<SchemaVersion>().is_err());
        assert!("0.1.2.3".parse::<SchemaVersion>().is_err());
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(SchemaVersion::new(0, 9) < SchemaVersion::new(0, 10));
        assert!(SchemaVersion::new(0, 11) < SchemaVersion::new(1, 0));
    }

    #[test]
    fn readable_range() {
        assert!(SchemaVersion::OLDEST.is_readable());
        assert!(SchemaVersion::CURRENT.is_readable());
        assert!(SchemaVersion::new(0, 12).is_readable());
        assert!(SchemaVersion::new(0, 12).is_newer_than_current());
        assert!(!SchemaVersion::new(0, 12).is_writable());
        assert!(!SchemaVersion::new(0, 4).is_readable());
        assert!(!SchemaVersion::new(1, 0).is_readable());
    }
}
