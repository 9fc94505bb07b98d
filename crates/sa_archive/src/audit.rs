//! Check that a type's `visit` matches its descriptors.
//!
//! The recorder walks a default instance and notes every top-level property
//! the `visit` method touches. The result must equal the descriptor list of
//! the type's [`ClassInfo`], base class properties first.

use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

use crate::archive::{Archive, Mode};
use crate::diagnostics::Diagnostic;
use crate::error::ArchiveError;
use crate::info::{ClassInfo, Property};
use crate::object::{Class, Described};
use crate::version::SchemaVersion;

// -----------------------------------------------------------------------------
// AuditMismatch

/// The `visit` of a class disagrees with its descriptors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("`{class}` visits {visited:?} but declares {declared:?}")]
pub struct AuditMismatch {
    pub class: &'static str,
    pub declared: Vec<&'static str>,
    pub visited: Vec<&'static str>,
}

// -----------------------------------------------------------------------------
// Recorder

struct Recorder {
    depth: usize,
    touched: Vec<&'static str>,
}

impl Archive for Recorder {
    #[inline]
    fn mode(&self) -> Mode {
        Mode::Walk
    }

    #[inline]
    fn version(&self) -> SchemaVersion {
        SchemaVersion::CURRENT
    }

    fn report(&mut self, _: Diagnostic) {}

    fn location(&self) -> String {
        String::new()
    }

    fn class(&self) -> &'static str {
        ""
    }

    fn begin(
        &mut self,
        _: &'static Property,
        _: &'static ClassInfo,
        _: usize,
    ) -> Result<(), ArchiveError> {
        self.depth += 1;
        Ok(())
    }

    fn end(&mut self) -> Result<(), ArchiveError> {
        self.depth -= 1;
        Ok(())
    }

    fn touch(&mut self, prop: &'static Property) {
        if self.depth == 0 {
            self.touched.push(prop.name());
        }
    }
}

/// The top-level properties `object.visit` touches, in order.
pub fn visit_order(object: &mut dyn Class) -> Result<Vec<&'static str>, ArchiveError> {
    let mut recorder = Recorder {
        depth: 0,
        touched: Vec::new(),
    };
    object.visit(&mut recorder)?;
    Ok(recorder.touched)
}

/// Compare the visit order of a default `T` with its descriptors.
pub fn audit<T: Described>() -> Result<(), AuditMismatch> {
    let info = T::info();
    let declared: Vec<_> = info.iter_properties().map(Property::name).collect();
    let visited = visit_order(&mut T::default()).unwrap_or_default();
    if declared == visited {
        Ok(())
    } else {
        Err(AuditMismatch {
            class: info.name(),
            declared,
            visited,
        })
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::ValueKind;
    use crate::object::{PUBLIC_OBJECT, visit_public_object};
    use crate::reference::PublicId;

    static VALUE: Property = Property::element("value", ValueKind::Primitive);
    static QUANTITY: ClassInfo = ClassInfo::new("RealQuantity", &[&VALUE]);

    #[derive(Debug, Default)]
    struct Quantity {
        value: f64,
    }

    impl Class for Quantity {
        fn class_info(&self) -> &'static ClassInfo {
            &QUANTITY
        }

        fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
            ar.required(&VALUE, &mut self.value)
        }
    }

    crate::impl_object!(Quantity, QUANTITY);

    static LATITUDE: Property = Property::element("latitude", ValueKind::Object);
    static DEPTH: Property = Property::element("depth", ValueKind::Object).optional();
    static GOOD: ClassInfo = ClassInfo::new("Good", &[&LATITUDE, &DEPTH]).with_base(&PUBLIC_OBJECT);
    static SWAPPED: ClassInfo =
        ClassInfo::new("Swapped", &[&LATITUDE, &DEPTH]).with_base(&PUBLIC_OBJECT);

    #[derive(Debug, Default)]
    struct Good {
        id: PublicId,
        latitude: Quantity,
        depth: Option<Quantity>,
    }

    impl Class for Good {
        fn class_info(&self) -> &'static ClassInfo {
            &GOOD
        }

        fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
            visit_public_object(&mut self.id, ar)?;
            ar.required(&LATITUDE, &mut self.latitude)?;
            ar.optional(&DEPTH, &mut self.depth)
        }
    }

    crate::impl_object!(Good, GOOD);

    #[derive(Debug, Default)]
    struct Swapped {
        id: PublicId,
        latitude: Quantity,
        depth: Option<Quantity>,
    }

    impl Class for Swapped {
        fn class_info(&self) -> &'static ClassInfo {
            &SWAPPED
        }

        fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
            ar.optional(&DEPTH, &mut self.depth)?;
            ar.required(&LATITUDE, &mut self.latitude)?;
            visit_public_object(&mut self.id, ar)
        }
    }

    crate::impl_object!(Swapped, SWAPPED);

    #[test]
    fn nested_properties_are_not_recorded() {
        assert_eq!(audit::<Quantity>(), Ok(()));
        assert_eq!(audit::<Good>(), Ok(()));
    }

    #[test]
    fn order_mismatch_is_reported() {
        let mismatch = audit::<Swapped>().unwrap_err();
        assert_eq!(mismatch.class, "Swapped");
        assert_eq!(mismatch.declared, ["publicID", "latitude", "depth"]);
        assert_eq!(mismatch.visited, ["depth", "latitude", "publicID"]);
    }
}
