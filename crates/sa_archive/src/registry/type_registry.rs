use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use sa_utils::hash::{FixedHashState, HashMap};
use thiserror::Error;

use crate::info::ClassInfo;
use crate::object::{Class, Described, PUBLIC_OBJECT};
use crate::registry::ClassMeta;

// -----------------------------------------------------------------------------
// CreateError

/// Failed to instantiate a class by name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CreateError {
    #[error("Type `{0}` is not registered")]
    NotFound(String),

    #[error("Type `{0}` is abstract and can not be instantiated")]
    Abstract(&'static str),
}

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of archivable classes, keyed by class name.
///
/// It is used to instantiate objects whose concrete type is only known
/// from the wire, and to answer inheritance questions.
///
/// # Example
///
/// ```
/// # use sa_archive::{Archive, ArchiveError, Class, ClassInfo, PublicId, impl_object};
/// use sa_archive::object::PUBLIC_OBJECT;
/// use sa_archive::registry::{CreateError, TypeRegistry};
/// # static PICK: ClassInfo = ClassInfo::new("Pick", &[]).with_base(&PUBLIC_OBJECT);
/// # #[derive(Debug, Default)]
/// # struct Pick;
/// # impl Class for Pick {
/// #     fn class_info(&self) -> &'static ClassInfo { &PICK }
/// #     fn visit(&mut self, _: &mut dyn Archive) -> Result<(), ArchiveError> { Ok(()) }
/// # }
/// # impl_object!(Pick, PICK);
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Pick>();
///
/// let pick = registry.create("Pick").unwrap();
/// assert!(registry.is_kind_of(&*pick, "PublicObject"));
/// assert!(registry.is_type_of("PublicObject", "Pick"));
///
/// assert!(matches!(registry.create("Reading"), Err(CreateError::NotFound(_))));
/// assert!(matches!(registry.create("PublicObject"), Err(CreateError::Abstract(_))));
/// ```
pub struct TypeRegistry {
    classes: HashMap<&'static str, ClassMeta>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a empty [`TypeRegistry`].
    #[inline]
    pub const fn empty() -> Self {
        Self {
            classes: HashMap::with_hasher(FixedHashState),
        }
    }

    /// Create a registry that knows the abstract [`PUBLIC_OBJECT`] base.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_abstract(&PUBLIC_OBJECT);
        registry
    }

    /// Try add or do nothing.
    ///
    /// - If the class name is already registered, the function will do nothing and return `false`.
    /// - Otherwise the entry is inserted and the function returns `true`.
    pub fn insert(&mut self, meta: ClassMeta) -> bool {
        let name = meta.name();
        if self.classes.contains_key(name) {
            log::debug!("class `{name}` is already registered");
            return false;
        }
        self.classes.insert(name, meta);
        true
    }

    /// Register the concrete class `T`.
    ///
    /// See [`insert`](Self::insert) for the return value.
    #[inline]
    pub fn register<T: Described>(&mut self) -> bool {
        self.insert(ClassMeta::of::<T>())
    }

    /// Register a class that can not be instantiated, e.g. a common base.
    #[inline]
    pub fn register_abstract(&mut self, info: &'static ClassInfo) -> bool {
        self.insert(ClassMeta::abstract_class(info))
    }

    /// Create a default instance of the class called `name`.
    pub fn create(&self, name: &str) -> Result<Box<dyn Class>, CreateError> {
        let meta = self
            .classes
            .get(name)
            .ok_or_else(|| CreateError::NotFound(name.to_string()))?;
        meta.create().ok_or(CreateError::Abstract(meta.name()))
    }

    /// Whether the class of `instance` is `base` or derives from it.
    #[inline]
    pub fn is_kind_of(&self, instance: &dyn Class, base: &str) -> bool {
        instance.class_info().is_kind_of(base)
    }

    /// Whether the registered class `derived` is `base` or derives from it.
    ///
    /// Returns `false` if `derived` is not registered.
    pub fn is_type_of(&self, base: &str, derived: &str) -> bool {
        self.classes
            .get(derived)
            .is_some_and(|meta| meta.info().is_kind_of(base))
    }

    /// Whether a class called `name` is registered.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&ClassMeta> {
        self.classes.get(name)
    }

    /// Number of registered classes, abstract ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Iterate over the entries in an unspecified order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &ClassMeta> {
        self.classes.values()
    }

    /// The registered class names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.classes.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::Archive;
    use crate::error::ArchiveError;
    use crate::info::{Property, ValueKind};
    use crate::object::visit_public_object;
    use crate::reference::PublicId;

    static PHASE: Property = Property::element("phase", ValueKind::Primitive);
    static PICK: ClassInfo = ClassInfo::new("Pick", &[&PHASE]).with_base(&PUBLIC_OBJECT);
    static NOTE: ClassInfo = ClassInfo::new("Note", &[]);

    #[derive(Debug, Default)]
    struct Pick {
        id: PublicId,
        phase: String,
    }

    impl Class for Pick {
        fn class_info(&self) -> &'static ClassInfo {
            &PICK
        }

        fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
            visit_public_object(&mut self.id, ar)?;
            ar.required(&PHASE, &mut self.phase)
        }
    }

    crate::impl_object!(Pick, PICK);

    #[derive(Debug, Default)]
    struct Note;

    impl Class for Note {
        fn class_info(&self) -> &'static ClassInfo {
            &NOTE
        }

        fn visit(&mut self, _: &mut dyn Archive) -> Result<(), ArchiveError> {
            Ok(())
        }
    }

    crate::impl_object!(Note, NOTE);

    #[test]
    fn register_once() {
        let mut registry = TypeRegistry::new();
        assert!(registry.register::<Pick>());
        assert!(!registry.register::<Pick>());
        assert!(registry.register::<Note>());
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.names(), ["Note", "Pick", "PublicObject"]);
    }

    #[test]
    fn create_and_downcast() {
        let mut registry = TypeRegistry::new();
        registry.register::<Pick>();

        let object = registry.create("Pick").unwrap();
        assert_eq!(object.class_info().name(), "Pick");
        let pick = object.take::<Pick>().unwrap();
        assert!(pick.phase.is_empty());

        assert_eq!(
            registry.create("Note").err(),
            Some(CreateError::NotFound("Note".to_string()))
        );
        assert_eq!(
            registry.create("PublicObject").err(),
            Some(CreateError::Abstract("PublicObject"))
        );
    }

    #[test]
    fn inheritance_queries() {
        let mut registry = TypeRegistry::new();
        registry.register::<Pick>();
        registry.register::<Note>();

        let pick = registry.create("Pick").unwrap();
        let note = registry.create("Note").unwrap();
        assert!(registry.is_kind_of(&*pick, "PublicObject"));
        assert!(registry.is_kind_of(&*pick, "Pick"));
        assert!(!registry.is_kind_of(&*note, "PublicObject"));

        assert!(registry.is_type_of("PublicObject", "Pick"));
        assert!(!registry.is_type_of("Pick", "PublicObject"));
        assert!(!registry.is_type_of("PublicObject", "Amplitude"));
    }
}
