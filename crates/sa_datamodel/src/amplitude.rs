use sa_archive::object::visit_public_object;
use sa_archive::{Archive, ArchiveError, Class, ClassInfo, PublicId, Reference, impl_object};

use crate::common::{
    Comment, CreationInfo, RealQuantity, TimeQuantity, TimeWindow, WaveformStreamId,
};
use crate::pick::Pick;
use crate::types::EvaluationMode;

mod amplitude {
    use sa_archive::object::PUBLIC_OBJECT;
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static TYPE: Property = Property::element("type", ValueKind::Primitive);
    pub static AMPLITUDE: Property = Property::element("amplitude", ValueKind::Object).optional();
    pub static TIME_WINDOW: Property =
        Property::element("timeWindow", ValueKind::Object).optional();
    pub static PERIOD: Property = Property::element("period", ValueKind::Object).optional();
    pub static SNR: Property = Property::element("snr", ValueKind::Primitive).optional();
    pub static UNIT: Property = Property::element("unit", ValueKind::Primitive)
        .optional()
        .since(0, 7);
    pub static PICK_ID: Property = Property::element("pickID", ValueKind::ReferenceId)
        .optional()
        .target("Pick");
    pub static WAVEFORM_ID: Property =
        Property::element("waveformID", ValueKind::Object).optional();
    pub static FILTER_ID: Property = Property::element("filterID", ValueKind::Primitive).optional();
    pub static METHOD_ID: Property = Property::element("methodID", ValueKind::Primitive).optional();
    pub static SCALING_TIME: Property =
        Property::element("scalingTime", ValueKind::Object).optional();
    pub static MAGNITUDE_HINT: Property =
        Property::element("magnitudeHint", ValueKind::Primitive).optional();
    pub static EVALUATION_MODE: Property =
        Property::element("evaluationMode", ValueKind::Enum).optional();
    pub static CREATION_INFO: Property =
        Property::element("creationInfo", ValueKind::Object).optional();
    pub static COMMENT: Property = Property::element("comment", ValueKind::Object).list();

    pub static INFO: ClassInfo = ClassInfo::new(
        "Amplitude",
        &[
            &TYPE,
            &AMPLITUDE,
            &TIME_WINDOW,
            &PERIOD,
            &SNR,
            &UNIT,
            &PICK_ID,
            &WAVEFORM_ID,
            &FILTER_ID,
            &METHOD_ID,
            &SCALING_TIME,
            &MAGNITUDE_HINT,
            &EVALUATION_MODE,
            &CREATION_INFO,
            &COMMENT,
        ],
    )
    .with_base(&PUBLIC_OBJECT);
}

// -----------------------------------------------------------------------------
// Amplitude

/// An amplitude measurement, usually the input of a station magnitude.
///
/// `unit` exists since schema 0.7.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Amplitude {
    pub public_id: PublicId,
    /// E.g. `MLv`, `mb` or `snr`.
    pub kind: String,
    pub amplitude: Option<RealQuantity>,
    pub time_window: Option<TimeWindow>,
    pub period: Option<RealQuantity>,
    pub snr: Option<f64>,
    pub unit: Option<String>,
    pub pick_id: Option<Reference<Pick>>,
    pub waveform_id: Option<WaveformStreamId>,
    pub filter_id: Option<String>,
    pub method_id: Option<String>,
    pub scaling_time: Option<TimeQuantity>,
    pub magnitude_hint: Option<String>,
    pub evaluation_mode: Option<EvaluationMode>,
    pub creation_info: Option<CreationInfo>,
    pub comments: Vec<Comment>,
}

impl Amplitude {
    pub fn new(public_id: impl Into<PublicId>, kind: impl Into<String>) -> Self {
        Self {
            public_id: public_id.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }
}

impl Class for Amplitude {
    fn class_info(&self) -> &'static ClassInfo {
        &amplitude::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use amplitude::*;
        visit_public_object(&mut self.public_id, ar)?;
        ar.required(&TYPE, &mut self.kind)?;
        ar.optional(&AMPLITUDE, &mut self.amplitude)?;
        ar.optional(&TIME_WINDOW, &mut self.time_window)?;
        ar.optional(&PERIOD, &mut self.period)?;
        ar.optional(&SNR, &mut self.snr)?;
        ar.optional(&UNIT, &mut self.unit)?;
        ar.optional(&PICK_ID, &mut self.pick_id)?;
        ar.optional(&WAVEFORM_ID, &mut self.waveform_id)?;
        ar.optional(&FILTER_ID, &mut self.filter_id)?;
        ar.optional(&METHOD_ID, &mut self.method_id)?;
        ar.optional(&SCALING_TIME, &mut self.scaling_time)?;
        ar.optional(&MAGNITUDE_HINT, &mut self.magnitude_hint)?;
        ar.optional(&EVALUATION_MODE, &mut self.evaluation_mode)?;
        ar.optional(&CREATION_INFO, &mut self.creation_info)?;
        ar.list(&COMMENT, &mut self.comments)
    }
}

impl_object!(Amplitude, amplitude::INFO);
