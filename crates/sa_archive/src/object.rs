//! The contract every archivable type implements.
//!
//! ## Menu
//!
//! - [`Class`]: object-safe, provides the [`ClassInfo`] and the `visit` method.
//! - [`Described`]: static access to the [`ClassInfo`] plus default construction.
//! - [`PUBLIC_OBJECT`]: the abstract base of every type carrying a `publicID`.
//! - [`impl_object!`](crate::impl_object): wires a `Class` into the registry and the archive.

use alloc::boxed::Box;
use core::any::Any;
use core::fmt::Debug;

use crate::archive::Archive;
use crate::error::ArchiveError;
use crate::info::{ClassInfo, Property, ValueKind};
use crate::reference::PublicId;

// -----------------------------------------------------------------------------
// AsAny

/// Conversions to [`Any`], implemented for every sized `'static` type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> AsAny for T {
    #[inline(always)]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline(always)]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    #[inline(always)]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

// -----------------------------------------------------------------------------
// Class

/// An archivable object.
///
/// `visit` hands every property to the archive **in the order of the
/// [`ClassInfo`]**, base class properties first. The same method is used for
/// reading, writing and walking; the [`Archive`] decides the direction.
///
/// In read mode `visit` never fails; problems are recorded on the archive.
/// In write mode the first backend error is returned.
pub trait Class: AsAny + Debug + Send + Sync {
    fn class_info(&self) -> &'static ClassInfo;

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError>;
}

impl dyn Class {
    /// Returns `true` if the concrete type is `T`.
    #[inline]
    pub fn is<T: Class>(&self) -> bool {
        self.as_any().is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Class>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    #[inline]
    pub fn downcast_mut<T: Class>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// Unbox into `T`, returns `None` if the concrete type is not `T`.
    #[inline]
    pub fn take<T: Class>(self: Box<Self>) -> Option<T> {
        self.into_any().downcast::<T>().ok().map(|boxed| *boxed)
    }

    /// Shortcut for `self.class_info().is_kind_of(base)`.
    #[inline]
    pub fn is_kind_of(&self, base: &str) -> bool {
        self.class_info().is_kind_of(base)
    }
}

/// A [`Class`] whose info is known statically and which can be default-constructed.
///
/// Usually implemented through [`impl_object!`](crate::impl_object).
pub trait Described: Class + Default + Sized {
    fn info() -> &'static ClassInfo;
}

// -----------------------------------------------------------------------------
// PublicObject

/// The `publicID` attribute shared by all public objects.
pub static PUBLIC_ID: Property = Property::attribute("publicID", ValueKind::Primitive);

/// Abstract base class of every object that carries a document-unique `publicID`.
pub static PUBLIC_OBJECT: ClassInfo = ClassInfo::abstract_class("PublicObject", &[&PUBLIC_ID]);

/// Transfer the properties of [`PUBLIC_OBJECT`].
///
/// Call this first in the `visit` of a class whose base is [`PUBLIC_OBJECT`].
#[inline]
pub fn visit_public_object(id: &mut PublicId, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
    ar.required(&PUBLIC_ID, id)
}

// -----------------------------------------------------------------------------
// impl_object

/// Implement [`Described`] and [`Value`](crate::value::Value) for a [`Class`].
///
/// The type must implement [`Default`], and `$info` must name the `static`
/// [`ClassInfo`] returned by its `class_info`.
///
/// # Examples
///
/// ```
/// use sa_archive::{Archive, ArchiveError, Class, ClassInfo, Property, ValueKind, impl_object};
///
/// static TEXT: Property = Property::element("text", ValueKind::Primitive);
/// static NOTE: ClassInfo = ClassInfo::new("Note", &[&TEXT]);
///
/// #[derive(Debug, Default)]
/// struct Note {
///     text: String,
/// }
///
/// impl Class for Note {
///     fn class_info(&self) -> &'static ClassInfo {
///         &NOTE
///     }
///
///     fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
///         ar.required(&TEXT, &mut self.text)
///     }
/// }
///
/// impl_object!(Note, NOTE);
/// ```
#[macro_export]
macro_rules! impl_object {
    ($ty:ty, $info:path) => {
        impl $crate::object::Described for $ty {
            #[inline]
            fn info() -> &'static $crate::info::ClassInfo {
                &$info
            }
        }

        impl $crate::value::Value for $ty {
            const KIND: $crate::info::ValueKind = $crate::info::ValueKind::Object;

            #[inline]
            fn read(
                ar: &mut dyn $crate::archive::Archive,
                prop: &'static $crate::info::Property,
                index: usize,
            ) -> ::core::result::Result<Self, $crate::value::Fault> {
                $crate::value::read_object::<Self>(ar, prop, index)
            }

            #[inline]
            fn write(
                &mut self,
                ar: &mut dyn $crate::archive::Archive,
                prop: &'static $crate::info::Property,
                index: usize,
            ) -> ::core::result::Result<(), $crate::error::ArchiveError> {
                $crate::value::write_object(self, ar, prop, index)
            }
        }
    };
}
