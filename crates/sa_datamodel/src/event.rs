//! Events: the grouping of origins and focal mechanisms that describe one
//! seismic event. An event owns no solutions, only references to them.

use sa_archive::object::visit_public_object;
use sa_archive::{Archive, ArchiveError, Class, ClassInfo, PublicId, Reference, impl_object};

use crate::common::{Comment, CreationInfo};
use crate::focal_mechanism::FocalMechanism;
use crate::magnitude::Magnitude;
use crate::origin::Origin;
use crate::types::{EventDescriptionType, EventType, EventTypeCertainty};

// -----------------------------------------------------------------------------
// Descriptors

mod event_description {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static TEXT: Property = Property::element("text", ValueKind::Primitive);
    pub static TYPE: Property = Property::element("type", ValueKind::Enum);

    pub static INFO: ClassInfo = ClassInfo::new("EventDescription", &[&TEXT, &TYPE]);
}

mod origin_reference {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static ORIGIN_ID: Property =
        Property::text("originID", ValueKind::ReferenceId).target("Origin");

    pub static INFO: ClassInfo = ClassInfo::new("OriginReference", &[&ORIGIN_ID]);
}

mod focal_mechanism_reference {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static FOCAL_MECHANISM_ID: Property =
        Property::text("focalMechanismID", ValueKind::ReferenceId).target("FocalMechanism");

    pub static INFO: ClassInfo = ClassInfo::new("FocalMechanismReference", &[&FOCAL_MECHANISM_ID]);
}

mod event {
    use sa_archive::object::PUBLIC_OBJECT;
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static PREFERRED_ORIGIN_ID: Property =
        Property::element("preferredOriginID", ValueKind::ReferenceId)
            .optional()
            .target("Origin");
    pub static PREFERRED_MAGNITUDE_ID: Property =
        Property::element("preferredMagnitudeID", ValueKind::ReferenceId)
            .optional()
            .target("Magnitude");
    pub static PREFERRED_FOCAL_MECHANISM_ID: Property =
        Property::element("preferredFocalMechanismID", ValueKind::ReferenceId)
            .optional()
            .target("FocalMechanism");
    pub static TYPE: Property = Property::element("type", ValueKind::Enum).optional();
    pub static TYPE_CERTAINTY: Property =
        Property::element("typeCertainty", ValueKind::Enum).optional();
    pub static CREATION_INFO: Property =
        Property::element("creationInfo", ValueKind::Object).optional();
    pub static DESCRIPTION: Property = Property::element("description", ValueKind::Object).list();
    pub static COMMENT: Property = Property::element("comment", ValueKind::Object).list();
    pub static ORIGIN_REFERENCE: Property =
        Property::element("originReference", ValueKind::Object).list();
    pub static FOCAL_MECHANISM_REFERENCE: Property =
        Property::element("focalMechanismReference", ValueKind::Object).list();

    pub static INFO: ClassInfo = ClassInfo::new(
        "Event",
        &[
            &PREFERRED_ORIGIN_ID,
            &PREFERRED_MAGNITUDE_ID,
            &PREFERRED_FOCAL_MECHANISM_ID,
            &TYPE,
            &TYPE_CERTAINTY,
            &CREATION_INFO,
            &DESCRIPTION,
            &COMMENT,
            &ORIGIN_REFERENCE,
            &FOCAL_MECHANISM_REFERENCE,
        ],
    )
    .with_base(&PUBLIC_OBJECT);
}

// -----------------------------------------------------------------------------
// EventDescription

/// A free text description, e.g. the Flinn-Engdahl region name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDescription {
    pub text: String,
    pub kind: EventDescriptionType,
}

impl EventDescription {
    #[inline]
    pub fn new(text: impl Into<String>, kind: EventDescriptionType) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

impl Class for EventDescription {
    fn class_info(&self) -> &'static ClassInfo {
        &event_description::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use event_description::*;
        ar.required(&TEXT, &mut self.text)?;
        ar.required(&TYPE, &mut self.kind)
    }
}

impl_object!(EventDescription, event_description::INFO);

// -----------------------------------------------------------------------------
// OriginReference

/// `<originReference>ID</originReference>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OriginReference {
    pub origin_id: Reference<Origin>,
}

impl OriginReference {
    #[inline]
    pub fn new(origin_id: &str) -> Self {
        Self {
            origin_id: Reference::new(origin_id),
        }
    }
}

impl Class for OriginReference {
    fn class_info(&self) -> &'static ClassInfo {
        &origin_reference::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        ar.required(&origin_reference::ORIGIN_ID, &mut self.origin_id)
    }
}

impl_object!(OriginReference, origin_reference::INFO);

// -----------------------------------------------------------------------------
// FocalMechanismReference

/// `<focalMechanismReference>ID</focalMechanismReference>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FocalMechanismReference {
    pub focal_mechanism_id: Reference<FocalMechanism>,
}

impl FocalMechanismReference {
    #[inline]
    pub fn new(focal_mechanism_id: &str) -> Self {
        Self {
            focal_mechanism_id: Reference::new(focal_mechanism_id),
        }
    }
}

impl Class for FocalMechanismReference {
    fn class_info(&self) -> &'static ClassInfo {
        &focal_mechanism_reference::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        ar.required(
            &focal_mechanism_reference::FOCAL_MECHANISM_ID,
            &mut self.focal_mechanism_id,
        )
    }
}

impl_object!(FocalMechanismReference, focal_mechanism_reference::INFO);

// -----------------------------------------------------------------------------
// Event

/// A seismic event.
///
/// The preferred references are ordinary [`Reference`]s: one that does not
/// resolve simply means "no preferred solution".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    pub public_id: PublicId,
    pub preferred_origin_id: Option<Reference<Origin>>,
    pub preferred_magnitude_id: Option<Reference<Magnitude>>,
    pub preferred_focal_mechanism_id: Option<Reference<FocalMechanism>>,
    pub kind: Option<EventType>,
    pub type_certainty: Option<EventTypeCertainty>,
    pub creation_info: Option<CreationInfo>,
    pub descriptions: Vec<EventDescription>,
    pub comments: Vec<Comment>,
    pub origin_references: Vec<OriginReference>,
    pub focal_mechanism_references: Vec<FocalMechanismReference>,
}

impl Event {
    #[inline]
    pub fn new(public_id: impl Into<PublicId>) -> Self {
        Self {
            public_id: public_id.into(),
            ..Self::default()
        }
    }

    /// Add an `originReference` unless one with the same ID exists.
    ///
    /// Returns `true` if the reference was added.
    pub fn add_origin_reference(&mut self, origin_id: &str) -> bool {
        if self.origin_references.iter().any(|r| r.origin_id.id() == origin_id) {
            return false;
        }
        self.origin_references.push(OriginReference::new(origin_id));
        true
    }

    /// Add a `focalMechanismReference` unless one with the same ID exists.
    ///
    /// Returns `true` if the reference was added.
    pub fn add_focal_mechanism_reference(&mut self, focal_mechanism_id: &str) -> bool {
        if self
            .focal_mechanism_references
            .iter()
            .any(|r| r.focal_mechanism_id.id() == focal_mechanism_id)
        {
            return false;
        }
        self.focal_mechanism_references
            .push(FocalMechanismReference::new(focal_mechanism_id));
        true
    }
}

impl Class for Event {
    fn class_info(&self) -> &'static ClassInfo {
        &event::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use event::*;
        visit_public_object(&mut self.public_id, ar)?;
        ar.optional(&PREFERRED_ORIGIN_ID, &mut self.preferred_origin_id)?;
        ar.optional(&PREFERRED_MAGNITUDE_ID, &mut self.preferred_magnitude_id)?;
        ar.optional(
            &PREFERRED_FOCAL_MECHANISM_ID,
            &mut self.preferred_focal_mechanism_id,
        )?;
        ar.optional(&TYPE, &mut self.kind)?;
        ar.optional(&TYPE_CERTAINTY, &mut self.type_certainty)?;
        ar.optional(&CREATION_INFO, &mut self.creation_info)?;
        ar.list(&DESCRIPTION, &mut self.descriptions)?;
        ar.list(&COMMENT, &mut self.comments)?;
        ar.list(&ORIGIN_REFERENCE, &mut self.origin_references)?;
        ar.list(
            &FOCAL_MECHANISM_REFERENCE,
            &mut self.focal_mechanism_references,
        )
    }
}

impl_object!(Event, event::INFO);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn references_are_unique() {
        let mut event = Event::new("Event/1");
        assert!(event.add_origin_reference("Origin/1"));
        assert!(event.add_origin_reference("Origin/2"));
        assert!(!event.add_origin_reference("Origin/1"));
        assert_eq!(event.origin_references.len(), 2);

        assert!(event.add_focal_mechanism_reference("FocalMechanism/1"));
        assert!(!event.add_focal_mechanism_reference("FocalMechanism/1"));
        assert_eq!(event.focal_mechanism_references.len(), 1);
    }
}
