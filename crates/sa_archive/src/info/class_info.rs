use alloc::vec::Vec;
use core::fmt;

use crate::info::Property;

// -----------------------------------------------------------------------------
// ClassInfo

/// The static description of an archivable type.
///
/// It holds the class name used on the wire, an optional base class and the
/// type's own properties in **declaration order**. The properties of the base
/// class come first when the whole list is iterated.
///
/// # Examples
///
/// ```
/// use sa_archive::info::{ClassInfo, Property, ValueKind};
///
/// static ID: Property = Property::attribute("publicID", ValueKind::Primitive);
/// static TEXT: Property = Property::element("text", ValueKind::Primitive);
///
/// static BASE: ClassInfo = ClassInfo::abstract_class("Base", &[&ID]);
/// static NOTE: ClassInfo = ClassInfo::new("Note", &[&TEXT]).with_base(&BASE);
///
/// let names: Vec<_> = NOTE.iter_properties().map(|p| p.name()).collect();
/// assert_eq!(names, ["publicID", "text"]);
/// assert!(NOTE.is_kind_of("Base"));
/// assert!(!BASE.is_kind_of("Note"));
/// ```
pub struct ClassInfo {
    name: &'static str,
    base: Option<&'static ClassInfo>,
    properties: &'static [&'static Property],
    is_abstract: bool,
}

impl ClassInfo {
    /// Create the info of a concrete class.
    #[inline]
    pub const fn new(name: &'static str, properties: &'static [&'static Property]) -> Self {
        Self {
            name,
            base: None,
            properties,
            is_abstract: false,
        }
    }

    /// Create the info of a class that is never instantiated on its own.
    #[inline]
    pub const fn abstract_class(
        name: &'static str,
        properties: &'static [&'static Property],
    ) -> Self {
        Self {
            name,
            base: None,
            properties,
            is_abstract: true,
        }
    }

    /// Set the base class.
    #[inline]
    pub const fn with_base(mut self, base: &'static ClassInfo) -> Self {
        self.base = Some(base);
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn base(&self) -> Option<&'static ClassInfo> {
        self.base
    }

    #[inline]
    pub const fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// The properties declared by this class itself, without inherited ones.
    #[inline]
    pub const fn own_properties(&self) -> &'static [&'static Property] {
        self.properties
    }

    /// Iterate over this class and its base classes, most derived first.
    pub fn ancestors(&'static self) -> impl Iterator<Item = &'static ClassInfo> {
        core::iter::successors(Some(self), |info| info.base)
    }

    /// Iterate over all properties, inherited ones first, each in declaration order.
    pub fn iter_properties(&'static self) -> impl Iterator<Item = &'static Property> {
        let mut chain: Vec<&'static ClassInfo> = self.ancestors().collect();
        chain.reverse();
        chain
            .into_iter()
            .flat_map(|info| info.properties.iter().copied())
    }

    /// Find a property by name, searching base classes as well.
    pub fn property(&'static self, name: &str) -> Option<&'static Property> {
        self.ancestors()
            .flat_map(|info| info.properties.iter().copied())
            .find(|p| p.name() == name)
    }

    /// Whether this class is `base` or derives from it.
    pub fn is_kind_of(&'static self, base: &str) -> bool {
        self.ancestors().any(|info| info.name == base)
    }
}

impl PartialEq for ClassInfo {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ClassInfo {}

impl fmt::Debug for ClassInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassInfo")
            .field("name", &self.name)
            .field("base", &self.base.map(ClassInfo::name))
            .field("properties", &self.properties.len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::ClassInfo;
    use crate::info::{Property, ValueKind};

    static ID: Property = Property::attribute("publicID", ValueKind::Primitive);
    static TIME: Property = Property::element("time", ValueKind::Object);
    static PHASE: Property = Property::element("phase", ValueKind::Primitive).optional();

    static ROOT: ClassInfo = ClassInfo::abstract_class("Root", &[&ID]);
    static MIDDLE: ClassInfo = ClassInfo::new("Middle", &[&TIME]).with_base(&ROOT);
    static LEAF: ClassInfo = ClassInfo::new("Leaf", &[&PHASE]).with_base(&MIDDLE);

    #[test]
    fn inherited_properties_come_first() {
        let names: alloc::vec::Vec<_> = LEAF.iter_properties().map(Property::name).collect();
        assert_eq!(names, ["publicID", "time", "phase"]);
        assert_eq!(LEAF.own_properties().len(), 1);
    }

    #[test]
    fn property_lookup_walks_bases() {
        assert_eq!(LEAF.property("publicID"), Some(&ID));
        assert_eq!(LEAF.property("phase"), Some(&PHASE));
        assert!(LEAF.property("depth").is_none());
    }

    #[test]
    fn kind_of_chain() {
        assert!(LEAF.is_kind_of("Leaf"));
        assert!(LEAF.is_kind_of("Middle"));
        assert!(LEAF.is_kind_of("Root"));
        assert!(!MIDDLE.is_kind_of("Leaf"));
        assert!(ROOT.is_abstract());
        assert!(!LEAF.is_abstract());
        assert_eq!(LEAF.ancestors().count(), 3);
    }
}
