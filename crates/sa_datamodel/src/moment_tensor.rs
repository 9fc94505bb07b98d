//! Moment tensor inversions and the data they used.

use sa_archive::object::visit_public_object;
use sa_archive::value::RealArray;
use sa_archive::{Archive, ArchiveError, Class, ClassInfo, PublicId, Reference, impl_object};

use crate::common::{Comment, CreationInfo, RealQuantity, WaveformStreamId};
use crate::magnitude::Magnitude;
use crate::origin::Origin;
use crate::types::{
    DataUsedWaveType, MomentTensorMethod, MomentTensorStatus, SourceTimeFunctionType,
};

// -----------------------------------------------------------------------------
// Descriptors

mod tensor {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static MRR: Property = Property::element("Mrr", ValueKind::Object);
    pub static MTT: Property = Property::element("Mtt", ValueKind::Object);
    pub static MPP: Property = Property::element("Mpp", ValueKind::Object);
    pub static MRT: Property = Property::element("Mrt", ValueKind::Object);
    pub static MRP: Property = Property::element("Mrp", ValueKind::Object);
    pub static MTP: Property = Property::element("Mtp", ValueKind::Object);

    pub static INFO: ClassInfo = ClassInfo::new("Tensor", &[&MRR, &MTT, &MPP, &MRT, &MRP, &MTP]);
}

mod source_time_function {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static TYPE: Property = Property::element("type", ValueKind::Enum);
    pub static DURATION: Property = Property::element("duration", ValueKind::Primitive);
    pub static RISE_TIME: Property = Property::element("riseTime", ValueKind::Primitive).optional();
    pub static DECAY_TIME: Property =
        Property::element("decayTime", ValueKind::Primitive).optional();

    pub static INFO: ClassInfo = ClassInfo::new(
        "SourceTimeFunction",
        &[&TYPE, &DURATION, &RISE_TIME, &DECAY_TIME],
    );
}

mod data_used {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static WAVE_TYPE: Property = Property::element("waveType", ValueKind::Enum);
    pub static STATION_COUNT: Property = Property::element("stationCount", ValueKind::Primitive);
    pub static COMPONENT_COUNT: Property =
        Property::element("componentCount", ValueKind::Primitive);
    pub static SHORTEST_PERIOD: Property =
        Property::element("shortestPeriod", ValueKind::Primitive).optional();

    pub static INFO: ClassInfo = ClassInfo::new(
        "DataUsed",
        &[&WAVE_TYPE, &STATION_COUNT, &COMPONENT_COUNT, &SHORTEST_PERIOD],
    );
}

mod phase_setting {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static CODE: Property = Property::attribute("code", ValueKind::Primitive);
    pub static LOWER_PERIOD: Property = Property::attribute("lowerPeriod", ValueKind::Primitive);
    pub static UPPER_PERIOD: Property = Property::attribute("upperPeriod", ValueKind::Primitive);
    pub static MINIMUM_SNR: Property =
        Property::attribute("minimumSNR", ValueKind::Primitive).optional();
    pub static MAXIMUM_TIME_SHIFT: Property =
        Property::attribute("maximumTimeShift", ValueKind::Primitive).optional();

    pub static INFO: ClassInfo = ClassInfo::new(
        "MomentTensorPhaseSetting",
        &[&CODE, &LOWER_PERIOD, &UPPER_PERIOD, &MINIMUM_SNR, &MAXIMUM_TIME_SHIFT],
    );
}

mod component_contribution {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static PHASE_CODE: Property = Property::attribute("phaseCode", ValueKind::Primitive);
    pub static COMPONENT: Property = Property::attribute("component", ValueKind::Primitive);
    pub static ACTIVE: Property = Property::attribute("active", ValueKind::Primitive);
    pub static WEIGHT: Property = Property::element("weight", ValueKind::Primitive);
    pub static TIME_SHIFT: Property = Property::element("timeShift", ValueKind::Primitive);
    pub static DATA_TIME_WINDOW: Property =
        Property::element("dataTimeWindow", ValueKind::Primitive);
    pub static MISFIT: Property = Property::element("misfit", ValueKind::Primitive).optional();
    pub static SNR: Property = Property::element("snr", ValueKind::Primitive).optional();

    pub static INFO: ClassInfo = ClassInfo::new(
        "MomentTensorComponentContribution",
        &[
            &PHASE_CODE,
            &COMPONENT,
            &ACTIVE,
            &WEIGHT,
            &TIME_SHIFT,
            &DATA_TIME_WINDOW,
            &MISFIT,
            &SNR,
        ],
    );
}

mod station_contribution {
    use sa_archive::object::PUBLIC_OBJECT;
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static ACTIVE: Property = Property::attribute("active", ValueKind::Primitive);
    pub static WAVEFORM_ID: Property =
        Property::element("waveformID", ValueKind::Object).optional();
    pub static WEIGHT: Property = Property::attribute("weight", ValueKind::Primitive).optional();
    pub static TIME_SHIFT: Property =
        Property::attribute("timeShift", ValueKind::Primitive).optional();
    pub static COMPONENT: Property = Property::element("component", ValueKind::Object).list();

    pub static INFO: ClassInfo = ClassInfo::new(
        "MomentTensorStationContribution",
        &[&ACTIVE, &WAVEFORM_ID, &WEIGHT, &TIME_SHIFT, &COMPONENT],
    )
    .with_base(&PUBLIC_OBJECT);
}

mod moment_tensor {
    use sa_archive::object::PUBLIC_OBJECT;
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static DERIVED_ORIGIN_ID: Property =
        Property::element("derivedOriginID", ValueKind::ReferenceId).target("Origin");
    pub static MOMENT_MAGNITUDE_ID: Property =
        Property::element("momentMagnitudeID", ValueKind::ReferenceId)
            .optional()
            .target("Magnitude");
    pub static SCALAR_MOMENT: Property =
        Property::element("scalarMoment", ValueKind::Object).optional();
    pub static TENSOR: Property = Property::element("tensor", ValueKind::Object).optional();
    pub static VARIANCE: Property = Property::element("variance", ValueKind::Primitive).optional();
    pub static VARIANCE_REDUCTION: Property =
        Property::element("varianceReduction", ValueKind::Primitive).optional();
    pub static DOUBLE_COUPLE: Property =
        Property::element("doubleCouple", ValueKind::Primitive).optional();
    pub static CLVD: Property = Property::element("clvd", ValueKind::Primitive).optional();
    pub static ISO: Property = Property::element("iso", ValueKind::Primitive).optional();
    pub static GREENS_FUNCTION_ID: Property =
        Property::element("greensFunctionID", ValueKind::Primitive).optional();
    pub static FILTER_ID: Property = Property::element("filterID", ValueKind::Primitive).optional();
    pub static SOURCE_TIME_FUNCTION: Property =
        Property::element("sourceTimeFunction", ValueKind::Object).optional();
    pub static METHOD_ID: Property = Property::element("methodID", ValueKind::Primitive).optional();
    pub static METHOD: Property = Property::element("method", ValueKind::Enum).optional();
    pub static STATUS: Property = Property::element("status", ValueKind::Enum).optional();
    pub static CMT_NAME: Property = Property::element("cmtName", ValueKind::Primitive).optional();
    pub static CMT_VERSION: Property =
        Property::element("cmtVersion", ValueKind::Primitive).optional();
    pub static CREATION_INFO: Property =
        Property::element("creationInfo", ValueKind::Object).optional();
    pub static COMMENT: Property = Property::element("comment", ValueKind::Object).list();
    pub static DATA_USED: Property = Property::element("dataUsed", ValueKind::Object).list();
    pub static PHASE_SETTING: Property =
        Property::element("phaseSetting", ValueKind::Object).list();
    pub static STATION_MOMENT_TENSOR_CONTRIBUTION: Property =
        Property::element("stationMomentTensorContribution", ValueKind::Object).list();

    pub static INFO: ClassInfo = ClassInfo::new(
        "MomentTensor",
        &[
            &DERIVED_ORIGIN_ID,
            &MOMENT_MAGNITUDE_ID,
            &SCALAR_MOMENT,
            &TENSOR,
            &VARIANCE,
            &VARIANCE_REDUCTION,
            &DOUBLE_COUPLE,
            &CLVD,
            &ISO,
            &GREENS_FUNCTION_ID,
            &FILTER_ID,
            &SOURCE_TIME_FUNCTION,
            &METHOD_ID,
            &METHOD,
            &STATUS,
            &CMT_NAME,
            &CMT_VERSION,
            &CREATION_INFO,
            &COMMENT,
            &DATA_USED,
            &PHASE_SETTING,
            &STATION_MOMENT_TENSOR_CONTRIBUTION,
        ],
    )
    .with_base(&PUBLIC_OBJECT);
}

// -----------------------------------------------------------------------------
// Tensor

/// The six independent moment tensor components, in Nm.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tensor {
    pub mrr: RealQuantity,
    pub mtt: RealQuantity,
    pub mpp: RealQuantity,
    pub mrt: RealQuantity,
    pub mrp: RealQuantity,
    pub mtp: RealQuantity,
}

impl Tensor {
    /// Build from plain values in the order `Mrr, Mtt, Mpp, Mrt, Mrp, Mtp`.
    pub fn from_components([mrr, mtt, mpp, mrt, mrp, mtp]: [f64; 6]) -> Self {
        Self {
            mrr: RealQuantity::new(mrr),
            mtt: RealQuantity::new(mtt),
            mpp: RealQuantity::new(mpp),
            mrt: RealQuantity::new(mrt),
            mrp: RealQuantity::new(mrp),
            mtp: RealQuantity::new(mtp),
        }
    }

    /// Sum of the diagonal.
    #[inline]
    pub fn trace(&self) -> f64 {
        self.mrr.value + self.mtt.value + self.mpp.value
    }
}

impl Class for Tensor {
    fn class_info(&self) -> &'static ClassInfo {
        &tensor::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use tensor::*;
        ar.required(&MRR, &mut self.mrr)?;
        ar.required(&MTT, &mut self.mtt)?;
        ar.required(&MPP, &mut self.mpp)?;
        ar.required(&MRT, &mut self.mrt)?;
        ar.required(&MRP, &mut self.mrp)?;
        ar.required(&MTP, &mut self.mtp)
    }
}

impl_object!(Tensor, tensor::INFO);

// -----------------------------------------------------------------------------
// SourceTimeFunction

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTimeFunction {
    pub kind: SourceTimeFunctionType,
    /// In seconds.
    pub duration: f64,
    pub rise_time: Option<f64>,
    pub decay_time: Option<f64>,
}

impl Class for SourceTimeFunction {
    fn class_info(&self) -> &'static ClassInfo {
        &source_time_function::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use source_time_function::*;
        ar.required(&TYPE, &mut self.kind)?;
        ar.required(&DURATION, &mut self.duration)?;
        ar.optional(&RISE_TIME, &mut self.rise_time)?;
        ar.optional(&DECAY_TIME, &mut self.decay_time)
    }
}

impl_object!(SourceTimeFunction, source_time_function::INFO);

// -----------------------------------------------------------------------------
// DataUsed

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataUsed {
    pub wave_type: DataUsedWaveType,
    pub station_count: i64,
    pub component_count: i64,
    pub shortest_period: Option<f64>,
}

impl Class for DataUsed {
    fn class_info(&self) -> &'static ClassInfo {
        &data_used::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use data_used::*;
        ar.required(&WAVE_TYPE, &mut self.wave_type)?;
        ar.required(&STATION_COUNT, &mut self.station_count)?;
        ar.required(&COMPONENT_COUNT, &mut self.component_count)?;
        ar.optional(&SHORTEST_PERIOD, &mut self.shortest_period)
    }
}

impl_object!(DataUsed, data_used::INFO);

// -----------------------------------------------------------------------------
// MomentTensorPhaseSetting

/// Period band and limits used for one phase, all attributes on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MomentTensorPhaseSetting {
    pub code: String,
    pub lower_period: f64,
    pub upper_period: f64,
    pub minimum_snr: Option<f64>,
    pub maximum_time_shift: Option<f64>,
}

impl Class for MomentTensorPhaseSetting {
    fn class_info(&self) -> &'static ClassInfo {
        &phase_setting::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use phase_setting::*;
        ar.required(&CODE, &mut self.code)?;
        ar.required(&LOWER_PERIOD, &mut self.lower_period)?;
        ar.required(&UPPER_PERIOD, &mut self.upper_period)?;
        ar.optional(&MINIMUM_SNR, &mut self.minimum_snr)?;
        ar.optional(&MAXIMUM_TIME_SHIFT, &mut self.maximum_time_shift)
    }
}

impl_object!(MomentTensorPhaseSetting, phase_setting::INFO);

// -----------------------------------------------------------------------------
// MomentTensorComponentContribution

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MomentTensorComponentContribution {
    pub phase_code: String,
    pub component: i64,
    pub active: bool,
    pub weight: f64,
    pub time_shift: f64,
    pub data_time_window: RealArray,
    pub misfit: Option<f64>,
    pub snr: Option<f64>,
}

impl Class for MomentTensorComponentContribution {
    fn class_info(&self) -> &'static ClassInfo {
        &component_contribution::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use component_contribution::*;
        ar.required(&PHASE_CODE, &mut self.phase_code)?;
        ar.required(&COMPONENT, &mut self.component)?;
        ar.required(&ACTIVE, &mut self.active)?;
        ar.required(&WEIGHT, &mut self.weight)?;
        ar.required(&TIME_SHIFT, &mut self.time_shift)?;
        ar.required(&DATA_TIME_WINDOW, &mut self.data_time_window)?;
        ar.optional(&MISFIT, &mut self.misfit)?;
        ar.optional(&SNR, &mut self.snr)
    }
}

impl_object!(
    MomentTensorComponentContribution,
    component_contribution::INFO
);

// -----------------------------------------------------------------------------
// MomentTensorStationContribution

/// The contribution of one station to a moment tensor inversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MomentTensorStationContribution {
    pub public_id: PublicId,
    pub active: bool,
    pub waveform_id: Option<WaveformStreamId>,
    pub weight: Option<f64>,
    pub time_shift: Option<f64>,
    pub components: Vec<MomentTensorComponentContribution>,
}

impl MomentTensorStationContribution {
    #[inline]
    pub fn new(public_id: impl Into<PublicId>, active: bool) -> Self {
        Self {
            public_id: public_id.into(),
            active,
            ..Self::default()
        }
    }
}

impl Class for MomentTensorStationContribution {
    fn class_info(&self) -> &'static ClassInfo {
        &station_contribution::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use station_contribution::*;
        visit_public_object(&mut self.public_id, ar)?;
        ar.required(&ACTIVE, &mut self.active)?;
        ar.optional(&WAVEFORM_ID, &mut self.waveform_id)?;
        ar.optional(&WEIGHT, &mut self.weight)?;
        ar.optional(&TIME_SHIFT, &mut self.time_shift)?;
        ar.list(&COMPONENT, &mut self.components)
    }
}

impl_object!(MomentTensorStationContribution, station_contribution::INFO);

// -----------------------------------------------------------------------------
// MomentTensor

/// A moment tensor solution, owned by a
/// [`FocalMechanism`](crate::focal_mechanism::FocalMechanism).
///
/// `derivedOriginID` is required and names the origin the inversion produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MomentTensor {
    pub public_id: PublicId,
    pub derived_origin_id: Reference<Origin>,
    pub moment_magnitude_id: Option<Reference<Magnitude>>,
    pub scalar_moment: Option<RealQuantity>,
    pub tensor: Option<Tensor>,
    pub variance: Option<f64>,
    pub variance_reduction: Option<f64>,
    pub double_couple: Option<f64>,
    pub clvd: Option<f64>,
    pub iso: Option<f64>,
    pub greens_function_id: Option<String>,
    pub filter_id: Option<String>,
    pub source_time_function: Option<SourceTimeFunction>,
    pub method_id: Option<String>,
    pub method: Option<MomentTensorMethod>,
    pub status: Option<MomentTensorStatus>,
    pub cmt_name: Option<String>,
    pub cmt_version: Option<String>,
    pub creation_info: Option<CreationInfo>,
    pub comments: Vec<Comment>,
    pub data_used: Vec<DataUsed>,
    pub phase_settings: Vec<MomentTensorPhaseSetting>,
    pub station_contributions: Vec<MomentTensorStationContribution>,
}

impl MomentTensor {
    #[inline]
    pub fn new(public_id: impl Into<PublicId>, derived_origin_id: &str) -> Self {
        Self {
            public_id: public_id.into(),
            derived_origin_id: Reference::new(derived_origin_id),
            ..Self::default()
        }
    }
}

impl Class for MomentTensor {
    fn class_info(&self) -> &'static ClassInfo {
        &moment_tensor::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use moment_tensor::*;
        visit_public_object(&mut self.public_id, ar)?;
        ar.required(&DERIVED_ORIGIN_ID, &mut self.derived_origin_id)?;
        ar.optional(&MOMENT_MAGNITUDE_ID, &mut self.moment_magnitude_id)?;
        ar.optional(&SCALAR_MOMENT, &mut self.scalar_moment)?;
        ar.optional(&TENSOR, &mut self.tensor)?;
        ar.optional(&VARIANCE, &mut self.variance)?;
        ar.optional(&VARIANCE_REDUCTION, &mut self.variance_reduction)?;
        ar.optional(&DOUBLE_COUPLE, &mut self.double_couple)?;
        ar.optional(&CLVD, &mut self.clvd)?;
        ar.optional(&ISO, &mut self.iso)?;
        ar.optional(&GREENS_FUNCTION_ID, &mut self.greens_function_id)?;
        ar.optional(&FILTER_ID, &mut self.filter_id)?;
        ar.optional(&SOURCE_TIME_FUNCTION, &mut self.source_time_function)?;
        ar.optional(&METHOD_ID, &mut self.method_id)?;
        ar.optional(&METHOD, &mut self.method)?;
        ar.optional(&STATUS, &mut self.status)?;
        ar.optional(&CMT_NAME, &mut self.cmt_name)?;
        ar.optional(&CMT_VERSION, &mut self.cmt_version)?;
        ar.optional(&CREATION_INFO, &mut self.creation_info)?;
        ar.list(&COMMENT, &mut self.comments)?;
        ar.list(&DATA_USED, &mut self.data_used)?;
        ar.list(&PHASE_SETTING, &mut self.phase_settings)?;
        ar.list(
            &STATION_MOMENT_TENSOR_CONTRIBUTION,
            &mut self.station_contributions,
        )
    }
}

impl_object!(MomentTensor, moment_tensor::INFO);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tensor_components() {
        let tensor = Tensor::from_components([1.0e17, -0.4e17, -0.6e17, 2.0e16, 0.0, 5.0e15]);
        assert_eq!(tensor.mtt.value, -0.4e17);
        assert_eq!(tensor.mtp.value, 5.0e15);
        assert!(tensor.trace().abs() < 1.0);
    }
}
