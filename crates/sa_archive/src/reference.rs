//! Identity and non-owning cross references.
//!
//! ## Menu
//!
//! - [`PublicId`]: the document-unique identifier of a public object.
//! - [`Reference`]: a typed reference to another public object, by ID.
//! - [`Handle`]: where a resolved reference points to.
//!
//! A reference is read and written as its ID string only. The
//! [resolver](crate::resolve) fills in the handle after a document is complete.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::archive::{Archive, Mode};
use crate::error::ArchiveError;
use crate::info::{ClassInfo, Property, ValueKind};
use crate::object::Described;
use crate::value::{Fault, Value};

// -----------------------------------------------------------------------------
// PublicId

/// The `publicID` of a public object.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublicId(String);

impl PublicId {
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PublicId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PublicId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PublicId {
    #[inline]
    fn from(id: &str) -> Self {
        Self(id.into())
    }
}

impl From<String> for PublicId {
    #[inline]
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for PublicId {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PublicId {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Value for PublicId {
    const KIND: ValueKind = ValueKind::Primitive;

    fn read(ar: &mut dyn Archive, prop: &'static Property, index: usize) -> Result<Self, Fault> {
        let text = ar.read_text(prop, index).ok_or(Fault::Absent)?;
        let id = text.trim();
        if id.is_empty() {
            return Err(Fault::Invalid { text });
        }
        Ok(Self(id.into()))
    }

    fn write(
        &mut self,
        ar: &mut dyn Archive,
        prop: &'static Property,
        _index: usize,
    ) -> Result<(), ArchiveError> {
        match ar.mode() {
            Mode::Walk => {
                ar.public_id(&self.0);
                Ok(())
            }
            _ => ar.write_text(prop, &self.0),
        }
    }
}

// -----------------------------------------------------------------------------
// Handle

/// The location of a resolved public object.
///
/// `path` holds the position of the object and of each of its owners,
/// outermost first. E.g. a station magnitude is addressed as
/// `[origin index, station magnitude index]`.
#[derive(Clone)]
pub struct Handle {
    class: &'static ClassInfo,
    path: Box<[u32]>,
}

impl Handle {
    #[inline]
    pub fn new(class: &'static ClassInfo, path: impl Into<Box<[u32]>>) -> Self {
        Self {
            class,
            path: path.into(),
        }
    }

    /// The class of the object.
    #[inline]
    pub const fn class(&self) -> &'static ClassInfo {
        self.class
    }

    #[inline]
    pub fn path(&self) -> &[u32] {
        &self.path
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        self.class.name() == other.class.name() && self.path == other.path
    }
}

impl Eq for Handle {}

impl Hash for Handle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class.name().hash(state);
        self.path.hash(state);
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?}", self.class.name(), self.path)
    }
}

// -----------------------------------------------------------------------------
// Reference

/// A non-owning reference to a public object of type `T`.
///
/// It always keeps the target's ID. After resolution it may also carry a
/// [`Handle`]. Two references are equal when their IDs are equal.
///
/// # Examples
///
/// ```
/// use sa_archive::Reference;
/// # use sa_archive::{Archive, ArchiveError, Class, ClassInfo, impl_object};
/// # static PICK: ClassInfo = ClassInfo::new("Pick", &[]);
/// # #[derive(Debug, Default)]
/// # struct Pick;
/// # impl Class for Pick {
/// #     fn class_info(&self) -> &'static ClassInfo { &PICK }
/// #     fn visit(&mut self, _: &mut dyn Archive) -> Result<(), ArchiveError> { Ok(()) }
/// # }
/// # impl_object!(Pick, PICK);
///
/// let pick: Reference<Pick> = Reference::new("Pick/20210430.1");
/// assert_eq!(pick.id(), "Pick/20210430.1");
/// assert!(!pick.is_resolved());
/// ```
pub struct Reference<T> {
    id: String,
    handle: Option<Handle>,
    marker: PhantomData<fn() -> T>,
}

impl<T> Reference<T> {
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            handle: None,
            marker: PhantomData,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Point the reference to another ID, dropping any resolution.
    #[inline]
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
        self.handle = None;
    }

    #[inline]
    pub fn handle(&self) -> Option<&Handle> {
        self.handle.as_ref()
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.handle.is_some()
    }

    #[inline]
    pub fn unresolve(&mut self) {
        self.handle = None;
    }
}

impl<T> Default for Reference<T> {
    #[inline]
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl<T> Clone for Reference<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            handle: self.handle.clone(),
            marker: PhantomData,
        }
    }
}

impl<T> PartialEq for Reference<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Reference<T> {}

impl<T> fmt::Debug for Reference<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.handle {
            Some(handle) => write!(f, "Reference({:?} -> {:?})", self.id, handle),
            None => write!(f, "Reference({:?})", self.id),
        }
    }
}

impl<T> From<&str> for Reference<T> {
    #[inline]
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<T: Described> Value for Reference<T> {
    const KIND: ValueKind = ValueKind::ReferenceId;

    fn read(ar: &mut dyn Archive, prop: &'static Property, index: usize) -> Result<Self, Fault> {
        let text = ar.read_text(prop, index).ok_or(Fault::Absent)?;
        let id = text.trim();
        if id.is_empty() {
            return Err(Fault::Invalid { text });
        }
        Ok(Self::new(id))
    }

    fn write(
        &mut self,
        ar: &mut dyn Archive,
        prop: &'static Property,
        _index: usize,
    ) -> Result<(), ArchiveError> {
        match ar.mode() {
            Mode::Walk => {
                ar.link(prop, T::info(), &self.id, &mut self.handle);
                Ok(())
            }
            _ => ar.write_text(prop, &self.id),
        }
    }
}
