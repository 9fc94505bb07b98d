use sa_archive::{Archive, ArchiveError, Class, ClassInfo, impl_object};

use crate::amplitude::Amplitude;
use crate::event::Event;
use crate::focal_mechanism::FocalMechanism;
use crate::origin::Origin;
use crate::pick::Pick;
use crate::reading::Reading;

// -----------------------------------------------------------------------------
// Descriptors

mod event_parameters {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static PICK: Property = Property::element("pick", ValueKind::Object).list();
    pub static AMPLITUDE: Property = Property::element("amplitude", ValueKind::Object).list();
    pub static READING: Property = Property::element("reading", ValueKind::Object).list();
    pub static ORIGIN: Property = Property::element("origin", ValueKind::Object).list();
    pub static FOCAL_MECHANISM: Property =
        Property::element("focalMechanism", ValueKind::Object).list();
    pub static EVENT: Property = Property::element("event", ValueKind::Object).list();

    pub static INFO: ClassInfo = ClassInfo::new(
        "EventParameters",
        &[&PICK, &AMPLITUDE, &READING, &ORIGIN, &FOCAL_MECHANISM, &EVENT],
    );
}

// -----------------------------------------------------------------------------
// EventParameters

/// The root aggregate: flat, ordered lists of every top-level public type.
///
/// Arrivals, magnitudes and moment tensors are not listed here; they live
/// inside their [`Origin`] or [`FocalMechanism`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventParameters {
    pub picks: Vec<Pick>,
    pub amplitudes: Vec<Amplitude>,
    pub readings: Vec<Reading>,
    pub origins: Vec<Origin>,
    pub focal_mechanisms: Vec<FocalMechanism>,
    pub events: Vec<Event>,
}

impl EventParameters {
    #[inline]
    pub const fn new() -> Self {
        Self {
            picks: Vec::new(),
            amplitudes: Vec::new(),
            readings: Vec::new(),
            origins: Vec::new(),
            focal_mechanisms: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Move every object of `other` behind the objects of `self`.
    pub fn append(&mut self, other: &mut EventParameters) {
        self.picks.append(&mut other.picks);
        self.amplitudes.append(&mut other.amplitudes);
        self.readings.append(&mut other.readings);
        self.origins.append(&mut other.origins);
        self.focal_mechanisms.append(&mut other.focal_mechanisms);
        self.events.append(&mut other.events);
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
            && self.amplitudes.is_empty()
            && self.readings.is_empty()
            && self.origins.is_empty()
            && self.focal_mechanisms.is_empty()
            && self.events.is_empty()
    }
}

impl Class for EventParameters {
    fn class_info(&self) -> &'static ClassInfo {
        &event_parameters::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use event_parameters::*;
        ar.list(&PICK, &mut self.picks)?;
        ar.list(&AMPLITUDE, &mut self.amplitudes)?;
        ar.list(&READING, &mut self.readings)?;
        ar.list(&ORIGIN, &mut self.origins)?;
        ar.list(&FOCAL_MECHANISM, &mut self.focal_mechanisms)?;
        ar.list(&EVENT, &mut self.events)
    }
}

impl_object!(EventParameters, event_parameters::INFO);

// -----------------------------------------------------------------------------
// Tests
