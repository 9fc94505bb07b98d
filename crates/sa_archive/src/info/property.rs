use crate::version::SchemaVersion;

// -----------------------------------------------------------------------------
// Kinds

/// Where a property lives in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireKind {
    /// An attribute of the owning element.
    Attribute,
    /// A child element named after the property.
    Element,
    /// The character content of the owning element.
    Text,
}

/// How many values a property holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// Exactly one value, missing it invalidates the owner.
    Scalar,
    /// Zero or one value.
    Optional,
    /// Zero or more values, order-preserving.
    List,
}

/// What kind of value a property holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `bool`, integers, floats, strings and arrays of them.
    Primitive,
    /// A string token from a closed set.
    Enum,
    /// An ISO-8601 timestamp.
    Timestamp,
    /// A nested object with its own properties.
    Object,
    /// The `publicID` of another object.
    ReferenceId,
}

// -----------------------------------------------------------------------------
// Property

/// Compile-time metadata for one serializable member of a type.
///
/// Properties are built with `const` constructors so they can be `static`:
///
/// ```
/// use sa_archive::info::{Cardinality, Property, ValueKind, WireKind};
/// use sa_archive::SchemaVersion;
///
/// static UNIT: Property = Property::element("unit", ValueKind::Primitive)
///     .optional()
///     .since(0, 7);
///
/// assert_eq!(UNIT.name(), "unit");
/// assert_eq!(UNIT.wire(), WireKind::Element);
/// assert_eq!(UNIT.cardinality(), Cardinality::Optional);
/// assert!(!UNIT.is_available(SchemaVersion::new(0, 6)));
/// assert!(UNIT.is_available(SchemaVersion::new(0, 7)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Property {
    name: &'static str,
    wire: WireKind,
    cardinality: Cardinality,
    kind: ValueKind,
    since: Option<SchemaVersion>,
    target: Option<&'static str>,
}

impl Property {
    const fn new(name: &'static str, wire: WireKind, kind: ValueKind) -> Self {
        Self {
            name,
            wire,
            cardinality: Cardinality::Scalar,
            kind,
            since: None,
            target: None,
        }
    }

    /// A required attribute.
    #[inline]
    pub const fn attribute(name: &'static str, kind: ValueKind) -> Self {
        Self::new(name, WireKind::Attribute, kind)
    }

    /// A required child element.
    #[inline]
    pub const fn element(name: &'static str, kind: ValueKind) -> Self {
        Self::new(name, WireKind::Element, kind)
    }

    /// The required character content of the owning element.
    #[inline]
    pub const fn text(name: &'static str, kind: ValueKind) -> Self {
        Self::new(name, WireKind::Text, kind)
    }

    /// Mark the property as optional.
    #[inline]
    pub const fn optional(mut self) -> Self {
        self.cardinality = Cardinality::Optional;
        self
    }

    /// Mark the property as a list.
    #[inline]
    pub const fn list(mut self) -> Self {
        self.cardinality = Cardinality::List;
        self
    }

    /// The property only exists in documents of at least `major.minor`.
    #[inline]
    pub const fn since(mut self, major: u16, minor: u16) -> Self {
        self.since = Some(SchemaVersion::new(major, minor));
        self
    }

    /// Name of the class a reference points to.
    #[inline]
    pub const fn target(mut self, class: &'static str) -> Self {
        self.target = Some(class);
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn wire(&self) -> WireKind {
        self.wire
    }

    #[inline]
    pub const fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    #[inline]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    #[inline]
    pub const fn introduced(&self) -> Option<SchemaVersion> {
        self.since
    }

    #[inline]
    pub const fn target_class(&self) -> Option<&'static str> {
        self.target
    }

    #[inline]
    pub const fn is_required(&self) -> bool {
        matches!(self.cardinality, Cardinality::Scalar)
    }

    /// Whether documents of `version` may contain this property.
    #[inline]
    pub fn is_available(&self, version: SchemaVersion) -> bool {
        match self.since {
            Some(since) => version >= since,
            None => true,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
