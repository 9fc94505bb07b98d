use sa_archive::object::visit_public_object;
use sa_archive::{Archive, ArchiveError, Class, ClassInfo, PublicId, impl_object};

use crate::common::{Comment, CreationInfo, RealQuantity, TimeQuantity, WaveformStreamId};
use crate::types::{EvaluationMode, EvaluationStatus, PickOnset, PickPolarity};

mod pick {
    use sa_archive::object::PUBLIC_OBJECT;
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static TIME: Property = Property::element("time", ValueKind::Object);
    pub static WAVEFORM_ID: Property = Property::element("waveformID", ValueKind::Object);
    pub static FILTER_ID: Property = Property::element("filterID", ValueKind::Primitive).optional();
    pub static METHOD_ID: Property = Property::element("methodID", ValueKind::Primitive).optional();
    pub static HORIZONTAL_SLOWNESS: Property =
        Property::element("horizontalSlowness", ValueKind::Object).optional();
    pub static BACKAZIMUTH: Property =
        Property::element("backazimuth", ValueKind::Object).optional();
    pub static SLOWNESS_METHOD_ID: Property =
        Property::element("slownessMethodID", ValueKind::Primitive).optional();
    pub static ONSET: Property = Property::element("onset", ValueKind::Enum).optional();
    pub static PHASE_HINT: Property =
        Property::element("phaseHint", ValueKind::Primitive).optional();
    pub static POLARITY: Property = Property::element("polarity", ValueKind::Enum).optional();
    pub static EVALUATION_MODE: Property =
        Property::element("evaluationMode", ValueKind::Enum).optional();
    pub static EVALUATION_STATUS: Property =
        Property::element("evaluationStatus", ValueKind::Enum).optional();
    pub static CREATION_INFO: Property =
        Property::element("creationInfo", ValueKind::Object).optional();
    pub static COMMENT: Property = Property::element("comment", ValueKind::Object).list();

    pub static INFO: ClassInfo = ClassInfo::new(
        "Pick",
        &[
            &TIME,
            &WAVEFORM_ID,
            &FILTER_ID,
            &METHOD_ID,
            &HORIZONTAL_SLOWNESS,
            &BACKAZIMUTH,
            &SLOWNESS_METHOD_ID,
            &ONSET,
            &PHASE_HINT,
            &POLARITY,
            &EVALUATION_MODE,
            &EVALUATION_STATUS,
            &CREATION_INFO,
            &COMMENT,
        ],
    )
    .with_base(&PUBLIC_OBJECT);
}

// -----------------------------------------------------------------------------
// Pick

/// A phase onset read on one waveform stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pick {
    pub public_id: PublicId,
    pub time: TimeQuantity,
    pub waveform_id: WaveformStreamId,
    pub filter_id: Option<String>,
    pub method_id: Option<String>,
    /// In s/deg.
    pub horizontal_slowness: Option<RealQuantity>,
    /// In degrees.
    pub backazimuth: Option<RealQuantity>,
    pub slowness_method_id: Option<String>,
    pub onset: Option<PickOnset>,
    pub phase_hint: Option<String>,
    pub polarity: Option<PickPolarity>,
    pub evaluation_mode: Option<EvaluationMode>,
    pub evaluation_status: Option<EvaluationStatus>,
    pub creation_info: Option<CreationInfo>,
    pub comments: Vec<Comment>,
}

impl Pick {
    pub fn new(
        public_id: impl Into<PublicId>,
        time: TimeQuantity,
        waveform_id: WaveformStreamId,
    ) -> Self {
        Self {
            public_id: public_id.into(),
            time,
            waveform_id,
            ..Self::default()
        }
    }
}

impl Class for Pick {
    fn class_info(&self) -> &'static ClassInfo {
        &pick::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use pick::*;
        visit_public_object(&mut self.public_id, ar)?;
        ar.required(&TIME, &mut self.time)?;
        ar.required(&WAVEFORM_ID, &mut self.waveform_id)?;
        ar.optional(&FILTER_ID, &mut self.filter_id)?;
        ar.optional(&METHOD_ID, &mut self.method_id)?;
        ar.optional(&HORIZONTAL_SLOWNESS, &mut self.horizontal_slowness)?;
        ar.optional(&BACKAZIMUTH, &mut self.backazimuth)?;
        ar.optional(&SLOWNESS_METHOD_ID, &mut self.slowness_method_id)?;
        ar.optional(&ONSET, &mut self.onset)?;
        ar.optional(&PHASE_HINT, &mut self.phase_hint)?;
        ar.optional(&POLARITY, &mut self.polarity)?;
        ar.optional(&EVALUATION_MODE, &mut self.evaluation_mode)?;
        ar.optional(&EVALUATION_STATUS, &mut self.evaluation_status)?;
        ar.optional(&CREATION_INFO, &mut self.creation_info)?;
        ar.list(&COMMENT, &mut self.comments)
    }
}

impl_object!(Pick, pick::INFO);
