//! The type registry.
//!
//! ## Menu
//!
//! - [`TypeRegistry`]: class name to constructor, plus inheritance queries.
//! - [`ClassMeta`]: the registered entry of one class.
//! - [`CreateError`]: why a class could not be instantiated.
//!
//! A registry is filled once, before any concurrent use, and read-only afterwards.

// -----------------------------------------------------------------------------
// Modules

mod class_meta;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use class_meta::ClassMeta;
pub use type_registry::{CreateError, TypeRegistry};
