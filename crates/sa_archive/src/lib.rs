#![doc = include_str!("../README.md")]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;

// -----------------------------------------------------------------------------
// Extern Self

// Let the exported macros use `sa_archive::` paths in this crate's own tests.
extern crate self as sa_archive;

// -----------------------------------------------------------------------------
// Modules

pub mod archive;
pub mod audit;
pub mod diagnostics;
pub mod error;
pub mod info;
pub mod object;
pub mod pass;
pub mod reference;
pub mod registry;
pub mod resolve;
pub mod value;
pub mod version;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports {
    pub use alloc::boxed::Box;
    pub use alloc::string::String;
}

pub use archive::{Archive, Mode};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::ArchiveError;
pub use info::{Cardinality, ClassInfo, Property, ValueKind, WireKind};
pub use object::{Class, Described};
pub use reference::{Handle, PublicId, Reference};
pub use registry::TypeRegistry;
pub use version::SchemaVersion;
