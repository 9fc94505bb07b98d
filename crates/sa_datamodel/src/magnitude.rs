use sa_archive::object::visit_public_object;
use sa_archive::{Archive, ArchiveError, Class, ClassInfo, PublicId, Reference, impl_object};

use crate::amplitude::Amplitude;
use crate::common::{Comment, CreationInfo, RealQuantity, WaveformStreamId};
use crate::origin::Origin;
use crate::types::EvaluationStatus;

// -----------------------------------------------------------------------------
// Descriptors

mod station_magnitude {
    use sa_archive::object::PUBLIC_OBJECT;
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static ORIGIN_ID: Property = Property::element("originID", ValueKind::ReferenceId)
        .optional()
        .target("Origin");
    pub static MAGNITUDE: Property = Property::element("magnitude", ValueKind::Object);
    pub static TYPE: Property = Property::element("type", ValueKind::Primitive).optional();
    pub static AMPLITUDE_ID: Property = Property::element("amplitudeID", ValueKind::ReferenceId)
        .optional()
        .target("Amplitude");
    pub static METHOD_ID: Property = Property::element("methodID", ValueKind::Primitive).optional();
    pub static WAVEFORM_ID: Property =
        Property::element("waveformID", ValueKind::Object).optional();
    pub static PASSED_QC: Property = Property::element("passedQC", ValueKind::Primitive)
        .optional()
        .since(0, 11);
    pub static CREATION_INFO: Property =
        Property::element("creationInfo", ValueKind::Object).optional();
    pub static COMMENT: Property = Property::element("comment", ValueKind::Object).list();

    pub static INFO: ClassInfo = ClassInfo::new(
        "StationMagnitude",
        &[
            &ORIGIN_ID,
            &MAGNITUDE,
            &TYPE,
            &AMPLITUDE_ID,
            &METHOD_ID,
            &WAVEFORM_ID,
            &PASSED_QC,
            &CREATION_INFO,
            &COMMENT,
        ],
    )
    .with_base(&PUBLIC_OBJECT);
}

mod station_magnitude_contribution {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static STATION_MAGNITUDE_ID: Property =
        Property::element("stationMagnitudeID", ValueKind::ReferenceId).target("StationMagnitude");
    pub static RESIDUAL: Property = Property::element("residual", ValueKind::Primitive).optional();
    pub static WEIGHT: Property = Property::element("weight", ValueKind::Primitive).optional();

    pub static INFO: ClassInfo = ClassInfo::new(
        "StationMagnitudeContribution",
        &[&STATION_MAGNITUDE_ID, &RESIDUAL, &WEIGHT],
    );
}

mod magnitude {
    use sa_archive::object::PUBLIC_OBJECT;
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static MAGNITUDE: Property = Property::element("magnitude", ValueKind::Object);
    pub static TYPE: Property = Property::element("type", ValueKind::Primitive).optional();
    pub static ORIGIN_ID: Property = Property::element("originID", ValueKind::ReferenceId)
        .optional()
        .target("Origin");
    pub static METHOD_ID: Property = Property::element("methodID", ValueKind::Primitive).optional();
    pub static STATION_COUNT: Property =
        Property::element("stationCount", ValueKind::Primitive).optional();
    pub static AZIMUTHAL_GAP: Property =
        Property::element("azimuthalGap", ValueKind::Primitive).optional();
    pub static EVALUATION_STATUS: Property =
        Property::element("evaluationStatus", ValueKind::Enum).optional();
    pub static CREATION_INFO: Property =
        Property::element("creationInfo", ValueKind::Object).optional();
    pub static COMMENT: Property = Property::element("comment", ValueKind::Object).list();
    pub static STATION_MAGNITUDE_CONTRIBUTION: Property =
        Property::element("stationMagnitudeContribution", ValueKind::Object).list();

    pub static INFO: ClassInfo = ClassInfo::new(
        "Magnitude",
        &[
            &MAGNITUDE,
            &TYPE,
            &ORIGIN_ID,
            &METHOD_ID,
            &STATION_COUNT,
            &AZIMUTHAL_GAP,
            &EVALUATION_STATUS,
            &CREATION_INFO,
            &COMMENT,
            &STATION_MAGNITUDE_CONTRIBUTION,
        ],
    )
    .with_base(&PUBLIC_OBJECT);
}

// -----------------------------------------------------------------------------
// StationMagnitude

/// A magnitude computed at a single station, owned by an [`Origin`].
///
/// `passedQC` exists since schema 0.11.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationMagnitude {
    pub public_id: PublicId,
    pub origin_id: Option<Reference<Origin>>,
    pub magnitude: RealQuantity,
    pub kind: Option<String>,
    pub amplitude_id: Option<Reference<Amplitude>>,
    pub method_id: Option<String>,
    pub waveform_id: Option<WaveformStreamId>,
    pub passed_qc: Option<bool>,
    pub creation_info: Option<CreationInfo>,
    pub comments: Vec<Comment>,
}

impl StationMagnitude {
    pub fn new(public_id: impl Into<PublicId>, magnitude: RealQuantity) -> Self {
        Self {
            public_id: public_id.into(),
            magnitude,
            ..Self::default()
        }
    }
}

impl Class for StationMagnitude {
    fn class_info(&self) -> &'static ClassInfo {
        &station_magnitude::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use station_magnitude::*;
        visit_public_object(&mut self.public_id, ar)?;
        ar.optional(&ORIGIN_ID, &mut self.origin_id)?;
        ar.required(&MAGNITUDE, &mut self.magnitude)?;
        ar.optional(&TYPE, &mut self.kind)?;
        ar.optional(&AMPLITUDE_ID, &mut self.amplitude_id)?;
        ar.optional(&METHOD_ID, &mut self.method_id)?;
        ar.optional(&WAVEFORM_ID, &mut self.waveform_id)?;
        ar.optional(&PASSED_QC, &mut self.passed_qc)?;
        ar.optional(&CREATION_INFO, &mut self.creation_info)?;
        ar.list(&COMMENT, &mut self.comments)
    }
}

impl_object!(StationMagnitude, station_magnitude::INFO);

// -----------------------------------------------------------------------------
// StationMagnitudeContribution

/// The use of a station magnitude in a network magnitude.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationMagnitudeContribution {
    pub station_magnitude_id: Reference<StationMagnitude>,
    pub residual: Option<f64>,
    pub weight: Option<f64>,
}

impl StationMagnitudeContribution {
    #[inline]
    pub fn new(station_magnitude_id: &str) -> Self {
        Self {
            station_magnitude_id: Reference::new(station_magnitude_id),
            ..Self::default()
        }
    }
}

impl Class for StationMagnitudeContribution {
    fn class_info(&self) -> &'static ClassInfo {
        &station_magnitude_contribution::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use station_magnitude_contribution::*;
        ar.required(&STATION_MAGNITUDE_ID, &mut self.station_magnitude_id)?;
        ar.optional(&RESIDUAL, &mut self.residual)?;
        ar.optional(&WEIGHT, &mut self.weight)
    }
}

impl_object!(
    StationMagnitudeContribution,
    station_magnitude_contribution::INFO
);

// -----------------------------------------------------------------------------
// Magnitude

/// A network magnitude, owned by an [`Origin`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Magnitude {
    pub public_id: PublicId,
    pub magnitude: RealQuantity,
    /// E.g. `ML`, `mb` or `Mw(mB)`.
    pub kind: Option<String>,
    pub origin_id: Option<Reference<Origin>>,
    pub method_id: Option<String>,
    pub station_count: Option<i64>,
    pub azimuthal_gap: Option<f64>,
    pub evaluation_status: Option<EvaluationStatus>,
    pub creation_info: Option<CreationInfo>,
    pub comments: Vec<Comment>,
    pub station_magnitude_contributions: Vec<StationMagnitudeContribution>,
}

impl Magnitude {
    pub fn new(public_id: impl Into<PublicId>, magnitude: RealQuantity) -> Self {
        Self {
            public_id: public_id.into(),
            magnitude,
            ..Self::default()
        }
    }
}

impl Class for Magnitude {
    fn class_info(&self) -> &'static ClassInfo {
        &magnitude::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use magnitude::*;
        visit_public_object(&mut self.public_id, ar)?;
        ar.required(&MAGNITUDE, &mut self.magnitude)?;
        ar.optional(&TYPE, &mut self.kind)?;
        ar.optional(&ORIGIN_ID, &mut self.origin_id)?;
        ar.optional(&METHOD_ID, &mut self.method_id)?;
        ar.optional(&STATION_COUNT, &mut self.station_count)?;
        ar.optional(&AZIMUTHAL_GAP, &mut self.azimuthal_gap)?;
        ar.optional(&EVALUATION_STATUS, &mut self.evaluation_status)?;
        ar.optional(&CREATION_INFO, &mut self.creation_info)?;
        ar.list(&COMMENT, &mut self.comments)?;
        ar.list(
            &STATION_MAGNITUDE_CONTRIBUTION,
            &mut self.station_magnitude_contributions,
        )
    }
}

impl_object!(Magnitude, magnitude::INFO);
