use alloc::boxed::Box;
use core::fmt;

use crate::info::ClassInfo;
use crate::object::{Class, Described};

// -----------------------------------------------------------------------------
// ClassMeta

/// Runtime entry of a class in the [`TypeRegistry`](crate::registry::TypeRegistry).
///
/// Concrete classes carry a constructor, abstract ones only their [`ClassInfo`].
///
/// # Example
///
/// ```
/// # use sa_archive::{Archive, ArchiveError, Class, ClassInfo, impl_object};
/// use sa_archive::registry::ClassMeta;
/// # static NOTE: ClassInfo = ClassInfo::new("Note", &[]);
/// # #[derive(Debug, Default)]
/// # struct Note;
/// # impl Class for Note {
/// #     fn class_info(&self) -> &'static ClassInfo { &NOTE }
/// #     fn visit(&mut self, _: &mut dyn Archive) -> Result<(), ArchiveError> { Ok(()) }
/// # }
/// # impl_object!(Note, NOTE);
///
/// let meta = ClassMeta::of::<Note>();
/// assert_eq!(meta.name(), "Note");
///
/// let object = meta.create().unwrap();
/// assert!(object.is::<Note>());
/// ```
#[derive(Clone, Copy)]
pub struct ClassMeta {
    info: &'static ClassInfo,
    ctor: Option<fn() -> Box<dyn Class>>,
}

fn construct<T: Described>() -> Box<dyn Class> {
    Box::new(T::default())
}

impl ClassMeta {
    /// The entry of a concrete class.
    #[inline]
    pub fn of<T: Described>() -> Self {
        Self {
            info: T::info(),
            ctor: Some(construct::<T>),
        }
    }

    /// The entry of an abstract class.
    #[inline]
    pub const fn abstract_class(info: &'static ClassInfo) -> Self {
        Self { info, ctor: None }
    }

    #[inline]
    pub const fn info(&self) -> &'static ClassInfo {
        self.info
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.info.name()
    }

    #[inline]
    pub const fn is_abstract(&self) -> bool {
        self.ctor.is_none()
    }

    /// Create a default instance, `None` for abstract classes.
    #[inline]
    pub fn create(&self) -> Option<Box<dyn Class>> {
        self.ctor.map(|ctor| ctor())
    }
}

impl fmt::Debug for ClassMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassMeta")
            .field("name", &self.name())
            .field("abstract", &self.is_abstract())
            .finish()
    }
}
