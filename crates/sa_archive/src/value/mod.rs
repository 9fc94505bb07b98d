//! Values that can be transferred by an [`Archive`].
//!
//! ## Menu
//!
//! - [`Value`]: anything a property can hold.
//! - [`Scalar`]: values with a text form; every `Scalar` is a `Value`.
//! - [`Enumeration`] and [`enumeration!`](crate::enumeration): token based enums with a fallback.
//! - [`Time`]: microsecond precision UTC timestamps.
//! - [`RealArray`]: a whitespace separated list of floats.
//!
//! Objects become values through [`impl_object!`](crate::impl_object), references
//! and public IDs live in [`reference`](crate::reference).

// -----------------------------------------------------------------------------
// Modules

mod enumeration;
mod primitives;
mod real_array;
mod time;

// -----------------------------------------------------------------------------
// Exports

pub use enumeration::{Enumeration, decode_enum};
pub use real_array::RealArray;
pub use time::Time;

// -----------------------------------------------------------------------------
// Value

use alloc::string::String;

use crate::archive::{Archive, Mode};
use crate::diagnostics::Diagnostic;
use crate::error::ArchiveError;
use crate::info::{Property, ValueKind};
use crate::object::{Class, Described};

/// Why a value could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// No wire value at the requested position.
    Absent,
    /// The text could not be parsed; the caller reports it.
    Invalid { text: String },
    /// A nested object was invalid; its problems are already reported.
    Dropped,
}

/// A value held by a property.
pub trait Value: Sized {
    /// The value kind descriptors of this type must declare.
    const KIND: ValueKind;

    /// Read the `index`-th wire value of `prop` from the current object.
    fn read(ar: &mut dyn Archive, prop: &'static Property, index: usize) -> Result<Self, Fault>;

    /// Write or walk the value; `index` is its position in a list, else 0.
    fn write(
        &mut self,
        ar: &mut dyn Archive,
        prop: &'static Property,
        index: usize,
    ) -> Result<(), ArchiveError>;
}

/// Read a nested object of type `T`.
///
/// The object is dropped if any of its required properties failed.
pub fn read_object<T: Described>(
    ar: &mut dyn Archive,
    prop: &'static Property,
    index: usize,
) -> Result<T, Fault> {
    if !ar.enter(prop, T::info(), index) {
        return Err(Fault::Absent);
    }
    let outer = ar.replace_validity(true);
    let mut object = T::default();
    let visited = object.visit(ar);
    let valid = ar.replace_validity(outer);
    ar.leave();

    match visited {
        Ok(()) if valid => Ok(object),
        _ => Err(Fault::Dropped),
    }
}

/// Write or walk a nested object.
pub fn write_object<T: Class>(
    object: &mut T,
    ar: &mut dyn Archive,
    prop: &'static Property,
    index: usize,
) -> Result<(), ArchiveError> {
    ar.begin(prop, object.class_info(), index)?;
    object.visit(ar)?;
    ar.end()
}

// -----------------------------------------------------------------------------
// Scalar

/// Options that shape the text form of scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    time_precision: u8,
}

impl Format {
    pub const DEFAULT_TIME_PRECISION: u8 = 6;

    #[inline]
    pub const fn new(time_precision: u8) -> Self {
        let time_precision = if time_precision > 6 { 6 } else { time_precision };
        Self { time_precision }
    }

    /// Fractional second digits of timestamps, at most 6.
    #[inline]
    pub const fn time_precision(&self) -> u8 {
        self.time_precision
    }
}

impl Default for Format {
    #[inline]
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIME_PRECISION)
    }
}

/// Information lost while decoding a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loss {
    /// More digits than the value can hold.
    Precision,
    /// An unknown enumeration token, replaced by `fallback`.
    UnknownToken { fallback: &'static str },
}

/// A decoded scalar, possibly with a [`Loss`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub loss: Option<Loss>,
}

impl<T> Decoded<T> {
    #[inline]
    pub const fn exact(value: T) -> Self {
        Self { value, loss: None }
    }

    #[inline]
    pub const fn lossy(value: T, loss: Loss) -> Self {
        Self {
            value,
            loss: Some(loss),
        }
    }
}

/// A value with a canonical text form.
///
/// # Examples
///
/// ```
/// use sa_archive::value::{Format, Scalar};
///
/// let decoded = <f64 as Scalar>::decode("45.678").unwrap();
/// assert_eq!(decoded.value, 45.678);
///
/// let mut text = String::new();
/// 3.5e17_f64.encode(&Format::default(), &mut text);
/// assert_eq!(text, "3.5e17");
/// ```
pub trait Scalar: Sized {
    const KIND: ValueKind = ValueKind::Primitive;

    /// Parse `text`, `None` if it is not a valid text form.
    fn decode(text: &str) -> Option<Decoded<Self>>;

    /// Append the canonical text form to `out`.
    fn encode(&self, format: &Format, out: &mut String);
}

impl<T: Scalar> Value for T {
    const KIND: ValueKind = <T as Scalar>::KIND;

    fn read(ar: &mut dyn Archive, prop: &'static Property, index: usize) -> Result<Self, Fault> {
        let text = ar.read_text(prop, index).ok_or(Fault::Absent)?;
        match T::decode(&text) {
            Some(Decoded { value, loss: None }) => Ok(value),
            Some(Decoded {
                value,
                loss: Some(loss),
            }) => {
                report_loss(ar, prop, text, loss);
                Ok(value)
            }
            None => Err(Fault::Invalid { text }),
        }
    }

    fn write(
        &mut self,
        ar: &mut dyn Archive,
        prop: &'static Property,
        _index: usize,
    ) -> Result<(), ArchiveError> {
        if ar.mode() == Mode::Walk {
            return Ok(());
        }
        let mut text = String::new();
        self.encode(&ar.format(), &mut text);
        ar.write_text(prop, &text)
    }
}

fn report_loss(ar: &mut dyn Archive, prop: &'static Property, text: String, loss: Loss) {
    let diagnostic = match loss {
        Loss::Precision => Diagnostic::PrecisionLoss {
            class: ar.class(),
            property: prop.name(),
            text,
            path: ar.location(),
        },
        Loss::UnknownToken { fallback } => Diagnostic::UnknownEnumToken {
            class: ar.class(),
            property: prop.name(),
            token: text,
            fallback,
            path: ar.location(),
        },
    };
    ar.report(diagnostic);
}
