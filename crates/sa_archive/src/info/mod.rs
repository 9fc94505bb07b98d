//! Static descriptions of archivable types.
//!
//! ## Menu
//!
//! - [`Property`]: one serializable member, with its [`WireKind`], [`Cardinality`]
//!   and [`ValueKind`].
//! - [`ClassInfo`]: the ordered property list of a type, plus its base class.
//!
//! Both are meant to live in `static` items, so that every instance of a type
//! shares one description and `&'static` references can be handed around freely.

// -----------------------------------------------------------------------------
// Modules

mod class_info;
mod property;

// -----------------------------------------------------------------------------
// Exports

pub use class_info::ClassInfo;
pub use property::{Cardinality, Property, ValueKind, WireKind};
