//! The bidirectional transfer protocol.
//!
//! ## Menu
//!
//! - [`Archive`]: implemented by backends (tree reader, tree writer) and walkers (resolver, audit).
//! - [`Mode`]: the direction of a pass.
//! - [`Trail`]: location bookkeeping shared by implementations.
//! - [`ReadOptions`], [`WriteOptions`], [`Strictness`]: pass configuration.
//!
//! Types never call backend methods directly. Their `visit` uses the three
//! transfer operations on `dyn Archive`, one per [`Cardinality`]:
//!
//! - [`required`](Archive::required) for `T`,
//! - [`optional`](Archive::optional) for `Option<T>`,
//! - [`list`](Archive::list) for `Vec<T>`,
//!
//! where `T` is any [`Value`].

// -----------------------------------------------------------------------------
// Modules

mod options;
mod trail;

// -----------------------------------------------------------------------------
// Exports

pub use options::{ReadOptions, Strictness, WriteOptions};
pub use trail::Trail;

// -----------------------------------------------------------------------------
// Archive

use alloc::string::String;
use alloc::vec::Vec;

use crate::diagnostics::Diagnostic;
use crate::error::ArchiveError;
use crate::info::{Cardinality, ClassInfo, Property};
use crate::reference::Handle;
use crate::value::{Fault, Format, Value};
use crate::version::SchemaVersion;

/// The direction of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Fill objects from the backend.
    Read,
    /// Emit objects to the backend.
    Write,
    /// Traverse objects without a backend, e.g. to index or link them.
    Walk,
}

/// The backend side of the transfer protocol.
///
/// Only [`mode`](Archive::mode), [`version`](Archive::version),
/// [`report`](Archive::report), [`location`](Archive::location) and
/// [`class`](Archive::class) are mandatory. The other hooks default to
/// "nothing there" and "nothing to do", so a walker implements just the
/// hooks it cares about.
pub trait Archive {
    fn mode(&self) -> Mode;

    /// The schema version of the document being read or written.
    fn version(&self) -> SchemaVersion;

    #[inline]
    fn strictness(&self) -> Strictness {
        Strictness::Lenient
    }

    #[inline]
    fn format(&self) -> Format {
        Format::default()
    }

    /// Record a non-fatal problem.
    fn report(&mut self, diagnostic: Diagnostic);

    /// Human readable position of the current object.
    fn location(&self) -> String;

    /// Class name of the current object.
    fn class(&self) -> &'static str;

    /// Set the validity of the current object, returning the previous one.
    ///
    /// Objects start valid; a missing or broken required property clears the flag.
    #[inline]
    fn replace_validity(&mut self, valid: bool) -> bool {
        let _ = valid;
        true
    }

    // ----- Read

    /// Number of wire values present for `prop` in the current object.
    #[inline]
    fn count(&self, prop: &'static Property) -> usize {
        let _ = prop;
        0
    }

    /// The text of the `index`-th wire value of `prop`.
    #[inline]
    fn read_text(&self, prop: &'static Property, index: usize) -> Option<String> {
        let _ = (prop, index);
        None
    }

    /// Make the `index`-th element of `prop` the current object.
    #[inline]
    fn enter(&mut self, prop: &'static Property, class: &'static ClassInfo, index: usize) -> bool {
        let _ = (prop, class, index);
        false
    }

    /// Return to the object that was current before the matching `enter`.
    #[inline]
    fn leave(&mut self) {}

    // ----- Write & Walk

    #[inline]
    fn write_text(&mut self, prop: &'static Property, text: &str) -> Result<(), ArchiveError> {
        let _ = (prop, text);
        Ok(())
    }

    /// Open a nested object for `prop`; `index` is its position in a list, else 0.
    #[inline]
    fn begin(
        &mut self,
        prop: &'static Property,
        class: &'static ClassInfo,
        index: usize,
    ) -> Result<(), ArchiveError> {
        let _ = (prop, class, index);
        Ok(())
    }

    /// Close the object opened by the matching `begin`.
    #[inline]
    fn end(&mut self) -> Result<(), ArchiveError> {
        Ok(())
    }

    // ----- Walk

    /// Called with the `publicID` of the current object.
    #[inline]
    fn public_id(&mut self, id: &str) {
        let _ = id;
    }

    /// Called with every reference; `handle` receives the resolution.
    #[inline]
    fn link(
        &mut self,
        prop: &'static Property,
        target: &'static ClassInfo,
        id: &str,
        handle: &mut Option<Handle>,
    ) {
        let _ = (prop, target, id, handle);
    }

    /// Called before every transfer operation.
    #[inline]
    fn touch(&mut self, prop: &'static Property) {
        let _ = prop;
    }
}

// -----------------------------------------------------------------------------
// Transfer operations

impl dyn Archive + '_ {
    /// Transfer a property that must be present.
    ///
    /// On read, a missing or unparseable value invalidates the current object.
    pub fn required<T: Value>(
        &mut self,
        prop: &'static Property,
        value: &mut T,
    ) -> Result<(), ArchiveError> {
        if !self.prologue::<T>(prop, Cardinality::Scalar) {
            return Ok(());
        }
        match self.mode() {
            Mode::Read => {
                if self.count(prop) == 0 {
                    self.report(Diagnostic::MissingRequiredProperty {
                        class: self.class(),
                        property: prop.name(),
                        path: self.location(),
                    });
                    self.invalidate();
                    return Ok(());
                }
                match T::read(self, prop, 0) {
                    Ok(read) => *value = read,
                    Err(fault) => {
                        self.fault(prop, fault);
                        self.invalidate();
                    }
                }
                Ok(())
            }
            Mode::Write | Mode::Walk => value.write(self, prop, 0),
        }
    }

    /// Transfer a property that may be absent.
    ///
    /// On write, `None` emits nothing.
    pub fn optional<T: Value>(
        &mut self,
        prop: &'static Property,
        value: &mut Option<T>,
    ) -> Result<(), ArchiveError> {
        if !self.prologue::<T>(prop, Cardinality::Optional) {
            return Ok(());
        }
        match self.mode() {
            Mode::Read => {
                *value = None;
                if self.count(prop) == 0 {
                    return Ok(());
                }
                match T::read(self, prop, 0) {
                    Ok(read) => *value = Some(read),
                    Err(fault) => self.soft_fault(prop, fault),
                }
                Ok(())
            }
            Mode::Write | Mode::Walk => match value {
                Some(value) => value.write(self, prop, 0),
                None => Ok(()),
            },
        }
    }

    /// Transfer a list of values, keeping their order.
    ///
    /// On read, elements that fail are dropped, whatever the strictness. On
    /// write, every element is emitted, an empty list emits nothing.
    pub fn list<T: Value>(
        &mut self,
        prop: &'static Property,
        values: &mut Vec<T>,
    ) -> Result<(), ArchiveError> {
        if !self.prologue::<T>(prop, Cardinality::List) {
            return Ok(());
        }
        match self.mode() {
            Mode::Read => {
                values.clear();
                let count = self.count(prop);
                values.reserve(count);
                for index in 0..count {
                    match T::read(self, prop, index) {
                        Ok(read) => values.push(read),
                        Err(fault) => self.fault(prop, fault),
                    }
                }
                Ok(())
            }
            Mode::Write | Mode::Walk => {
                for (index, value) in values.iter_mut().enumerate() {
                    value.write(self, prop, index)?;
                }
                Ok(())
            }
        }
    }

    /// Mark the current object as invalid.
    #[inline]
    pub fn invalidate(&mut self) {
        self.replace_validity(false);
    }

    // Returns `false` if the property does not take part in this pass.
    #[inline]
    fn prologue<T: Value>(&mut self, prop: &'static Property, cardinality: Cardinality) -> bool {
        self.touch(prop);
        check_descriptor::<T>(prop, cardinality);
        self.mode() == Mode::Walk || prop.is_available(self.version())
    }

    fn fault(&mut self, prop: &'static Property, fault: Fault) {
        if let Fault::Invalid { text } = fault {
            self.report(Diagnostic::InvalidValue {
                class: self.class(),
                property: prop.name(),
                text,
                path: self.location(),
            });
        }
    }

    // Fault of an optional value.
    fn soft_fault(&mut self, prop: &'static Property, fault: Fault) {
        self.fault(prop, fault);
        if self.strictness() == Strictness::Strict {
            self.invalidate();
        }
    }
}

#[inline(always)]
fn check_descriptor<T: Value>(prop: &'static Property, cardinality: Cardinality) {
    #[cfg(all(debug_assertions, feature = "debug"))]
    {
        assert_eq!(
            prop.cardinality(),
            cardinality,
            "property `{}` is transferred with the wrong cardinality",
            prop.name(),
        );
        assert_eq!(
            prop.kind(),
            T::KIND,
            "property `{}` is transferred with the wrong value kind",
            prop.name(),
        );
    }
    #[cfg(not(all(debug_assertions, feature = "debug")))]
    {
        let _ = (prop, cardinality);
    }
}
