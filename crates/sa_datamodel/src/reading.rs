//! Readings: a group of picks and amplitudes measured together, without
//! an origin to associate them with.

use sa_archive::object::visit_public_object;
use sa_archive::{Archive, ArchiveError, Class, ClassInfo, PublicId, Reference, impl_object};

use crate::amplitude::Amplitude;
use crate::pick::Pick;

// -----------------------------------------------------------------------------
// Descriptors

mod pick_reference {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static PICK_ID: Property =
        Property::text("pickID", ValueKind::ReferenceId).target("Pick");

    pub static INFO: ClassInfo = ClassInfo::new("PickReference", &[&PICK_ID]);
}

mod amplitude_reference {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static AMPLITUDE_ID: Property =
        Property::text("amplitudeID", ValueKind::ReferenceId).target("Amplitude");

    pub static INFO: ClassInfo = ClassInfo::new("AmplitudeReference", &[&AMPLITUDE_ID]);
}

mod reading {
    use sa_archive::object::PUBLIC_OBJECT;
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static PICK_REFERENCE: Property =
        Property::element("pickReference", ValueKind::Object).list();
    pub static AMPLITUDE_REFERENCE: Property =
        Property::element("amplitudeReference", ValueKind::Object).list();

    pub static INFO: ClassInfo = ClassInfo::new(
        "Reading",
        &[&PICK_REFERENCE, &AMPLITUDE_REFERENCE],
    )
    .with_base(&PUBLIC_OBJECT);
}

// -----------------------------------------------------------------------------
// PickReference

/// `<pickReference>ID</pickReference>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickReference {
    pub pick_id: Reference<Pick>,
}

impl PickReference {
    #[inline]
    pub fn new(pick_id: &str) -> Self {
        Self {
            pick_id: Reference::new(pick_id),
        }
    }
}

impl Class for PickReference {
    fn class_info(&self) -> &'static ClassInfo {
        &pick_reference::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        ar.required(&pick_reference::PICK_ID, &mut self.pick_id)
    }
}

impl_object!(PickReference, pick_reference::INFO);

// -----------------------------------------------------------------------------
// AmplitudeReference

/// `<amplitudeReference>ID</amplitudeReference>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmplitudeReference {
    pub amplitude_id: Reference<Amplitude>,
}

impl AmplitudeReference {
    #[inline]
    pub fn new(amplitude_id: &str) -> Self {
        Self {
            amplitude_id: Reference::new(amplitude_id),
        }
    }
}

impl Class for AmplitudeReference {
    fn class_info(&self) -> &'static ClassInfo {
        &amplitude_reference::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        ar.required(&amplitude_reference::AMPLITUDE_ID, &mut self.amplitude_id)
    }
}

impl_object!(AmplitudeReference, amplitude_reference::INFO);

// -----------------------------------------------------------------------------
// Reading

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reading {
    pub public_id: PublicId,
    pub pick_references: Vec<PickReference>,
    pub amplitude_references: Vec<AmplitudeReference>,
}

impl Reading {
    #[inline]
    pub fn new(public_id: impl Into<PublicId>) -> Self {
        Self {
            public_id: public_id.into(),
            ..Self::default()
        }
    }

    /// Add a reference to `pick_id` unless the reading already holds one.
    pub fn add_pick_reference(&mut self, pick_id: &str) -> bool {
        if self.pick_references.iter().any(|r| r.pick_id.id() == pick_id) {
            return false;
        }
        self.pick_references.push(PickReference::new(pick_id));
        true
    }

    /// Add a reference to `amplitude_id` unless the reading already holds one.
    pub fn add_amplitude_reference(&mut self, amplitude_id: &str) -> bool {
        if self
            .amplitude_references
            .iter()
            .any(|r| r.amplitude_id.id() == amplitude_id)
        {
            return false;
        }
        self.amplitude_references
            .push(AmplitudeReference::new(amplitude_id));
        true
    }
}

impl Class for Reading {
    fn class_info(&self) -> &'static ClassInfo {
        &reading::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use reading::*;
        visit_public_object(&mut self.public_id, ar)?;
        ar.list(&PICK_REFERENCE, &mut self.pick_references)?;
        ar.list(&AMPLITUDE_REFERENCE, &mut self.amplitude_references)
    }
}

impl_object!(Reading, reading::INFO);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn references_are_unique() {
        let mut reading = Reading::new("Reading/1");
        assert!(reading.add_pick_reference("Pick/1"));
        assert!(reading.add_pick_reference("Pick/2"));
        assert!(!reading.add_pick_reference("Pick/1"));
        assert!(reading.add_amplitude_reference("Amplitude/1"));
        assert!(!reading.add_amplitude_reference("Amplitude/1"));

        assert_eq!(reading.pick_references.len(), 2);
        assert_eq!(
            reading.amplitude_references[0].amplitude_id.id(),
            "Amplitude/1"
        );
    }
}
