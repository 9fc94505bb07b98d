use crate::resolve::DuplicatePolicy;
use crate::value::Format;
use crate::version::SchemaVersion;

// -----------------------------------------------------------------------------
// Strictness

/// What happens to an object when one of its optional values can not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// The value becomes absent and an `InvalidValue` diagnostic is recorded.
    #[default]
    Lenient,
    /// The enclosing object is dropped.
    Strict,
}

// -----------------------------------------------------------------------------
// ReadOptions

/// Options of a read pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadOptions {
    pub strictness: Strictness,
    pub duplicates: DuplicatePolicy,
}

impl ReadOptions {
    #[inline]
    pub const fn new() -> Self {
        Self {
            strictness: Strictness::Lenient,
            duplicates: DuplicatePolicy::LastWins,
        }
    }

    #[inline]
    pub const fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    #[inline]
    pub const fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }
}

// -----------------------------------------------------------------------------
// WriteOptions

/// Options of a write pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// The schema version declared by, and used for, the written document.
    pub version: SchemaVersion,
    /// Fractional second digits of written timestamps, at most 6.
    pub time_precision: u8,
}

impl Default for WriteOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl WriteOptions {
    #[inline]
    pub const fn new() -> Self {
        Self {
            version: SchemaVersion::CURRENT,
            time_precision: Format::DEFAULT_TIME_PRECISION,
        }
    }

    #[inline]
    pub const fn with_version(mut self, version: SchemaVersion) -> Self {
        self.version = version;
        self
    }

    #[inline]
    pub const fn with_time_precision(mut self, digits: u8) -> Self {
        self.time_precision = digits;
        self
    }

    #[inline]
    pub const fn format(&self) -> Format {
        Format::new(self.time_precision)
    }
}
