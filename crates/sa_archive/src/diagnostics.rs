//! Object-scoped problems, collected instead of raised.
//!
//! A catalog with one bad object should not discard thousands of good ones,
//! so readers and resolvers push a [`Diagnostic`] and keep going.

use alloc::string::String;
use alloc::vec::Vec;
use core::slice;

use thiserror::Error;

use crate::resolve::DuplicatePolicy;

// -----------------------------------------------------------------------------
// Diagnostic

/// A non-fatal problem found during a pass.
///
/// `path` is a slash separated location, e.g. `seiscomp/EventParameters[0]/origin[3]/arrival[0]`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Diagnostic {
    #[error("Unknown type `{tag}` at {path}, element skipped")]
    UnknownType { tag: String, path: String },

    #[error("Missing required property `{class}.{property}` at {path}, object dropped")]
    MissingRequiredProperty {
        class: &'static str,
        property: &'static str,
        path: String,
    },

    #[error("Invalid value `{text}` for `{class}.{property}` at {path}")]
    InvalidValue {
        class: &'static str,
        property: &'static str,
        text: String,
        path: String,
    },

    #[error("Unknown token `{token}` for `{class}.{property}` at {path}, using `{fallback}`")]
    UnknownEnumToken {
        class: &'static str,
        property: &'static str,
        token: String,
        fallback: &'static str,
        path: String,
    },

    #[error("Reference `{class}.{property}` = `{id}` at {path} does not resolve to a {expected}")]
    DanglingReference {
        class: &'static str,
        property: &'static str,
        id: String,
        expected: &'static str,
        /// The class of an object that carries the ID but has the wrong type.
        found: Option<&'static str>,
        path: String,
    },

    #[error("Duplicate publicID `{id}` at {path}, {policy:?} applied")]
    DuplicatePublicId {
        id: String,
        policy: DuplicatePolicy,
        path: String,
    },

    #[error("Precision lost reading `{class}.{property}` = `{text}` at {path}")]
    PrecisionLoss {
        class: &'static str,
        property: &'static str,
        text: String,
        path: String,
    },
}

/// The variant of a [`Diagnostic`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    UnknownType,
    MissingRequiredProperty,
    InvalidValue,
    UnknownEnumToken,
    DanglingReference,
    DuplicatePublicId,
    PrecisionLoss,
}

impl Diagnostic {
    pub const fn kind(&self) -> DiagnosticKind {
        match self {
            Self::UnknownType { .. } => DiagnosticKind::UnknownType,
            Self::MissingRequiredProperty { .. } => DiagnosticKind::MissingRequiredProperty,
            Self::InvalidValue { .. } => DiagnosticKind::InvalidValue,
            Self::UnknownEnumToken { .. } => DiagnosticKind::UnknownEnumToken,
            Self::DanglingReference { .. } => DiagnosticKind::DanglingReference,
            Self::DuplicatePublicId { .. } => DiagnosticKind::DuplicatePublicId,
            Self::PrecisionLoss { .. } => DiagnosticKind::PrecisionLoss,
        }
    }

    /// Where the problem was found.
    pub fn path(&self) -> &str {
        match self {
            Self::UnknownType { path, .. }
            | Self::MissingRequiredProperty { path, .. }
            | Self::InvalidValue { path, .. }
            | Self::UnknownEnumToken { path, .. }
            | Self::DanglingReference { path, .. }
            | Self::DuplicatePublicId { path, .. }
            | Self::PrecisionLoss { path, .. } => path,
        }
    }
}

// -----------------------------------------------------------------------------
// Diagnostics

/// An ordered list of [`Diagnostic`]s.
///
/// Every pushed diagnostic is also logged at `warn` level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        self.0.push(diagnostic);
    }

    /// Move all diagnostics of `other` to the end of `self`.
    #[inline]
    pub fn append(&mut self, other: &mut Diagnostics) {
        self.0.append(&mut other.0);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    /// Iterate over the diagnostics of one kind.
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(move |d| d.kind() == kind)
    }

    /// Count the diagnostics of one kind.
    #[inline]
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.of_kind(kind).count()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.0
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = slice::Iter<'a, Diagnostic>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = alloc::vec::IntoIter<Diagnostic>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn count_by_kind() {
        let mut list = Diagnostics::new();
        list.push(Diagnostic::UnknownType {
            tag: "reading".to_string(),
            path: "seiscomp/EventParameters[0]".to_string(),
        });
        list.push(Diagnostic::MissingRequiredProperty {
            class: "Arrival",
            property: "phase",
            path: "seiscomp/EventParameters[0]/origin[0]/arrival[1]".to_string(),
        });
        list.push(Diagnostic::UnknownType {
            tag: "note".to_string(),
            path: "seiscomp".to_string(),
        });

        assert_eq!(list.len(), 3);
        assert_eq!(list.count(DiagnosticKind::UnknownType), 2);
        assert_eq!(list.count(DiagnosticKind::DanglingReference), 0);
        assert_eq!(
            list.iter().nth(1).map(Diagnostic::path),
            Some("seiscomp/EventParameters[0]/origin[0]/arrival[1]")
        );
    }

    #[test]
    fn message_names_the_property() {
        let d = Diagnostic::InvalidValue {
            class: "Pick",
            property: "horizontalSlowness",
            text: "fast".to_string(),
            path: "seiscomp/EventParameters[0]/pick[2]".to_string(),
        };
        let message = d.to_string();
        assert!(message.contains("Pick.horizontalSlowness"));
        assert!(message.contains("`fast`"));
    }
}
