//! Origins and what they own: composite times, arrivals, quality figures,
//! uncertainties, station magnitudes and network magnitudes.

use sa_archive::object::visit_public_object;
use sa_archive::{Archive, ArchiveError, Class, ClassInfo, PublicId, Reference, impl_object};

use crate::common::{Comment, CreationInfo, IntegerQuantity, RealQuantity, TimeQuantity};
use crate::magnitude::{Magnitude, StationMagnitude};
use crate::pick::Pick;
use crate::types::{
    EvaluationMode, EvaluationStatus, OriginDepthType, OriginType, OriginUncertaintyDescription,
};

// -----------------------------------------------------------------------------
// Descriptors

mod arrival {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static PICK_ID: Property =
        Property::element("pickID", ValueKind::ReferenceId).target("Pick");
    pub static PHASE: Property = Property::element("phase", ValueKind::Primitive);
    pub static TIME_CORRECTION: Property =
        Property::element("timeCorrection", ValueKind::Primitive).optional();
    pub static AZIMUTH: Property = Property::element("azimuth", ValueKind::Primitive).optional();
    pub static DISTANCE: Property = Property::element("distance", ValueKind::Primitive).optional();
    pub static TAKE_OFF_ANGLE: Property =
        Property::element("takeOffAngle", ValueKind::Primitive).optional();
    pub static TIME_RESIDUAL: Property =
        Property::element("timeResidual", ValueKind::Primitive).optional();
    pub static HORIZONTAL_SLOWNESS_RESIDUAL: Property =
        Property::element("horizontalSlownessResidual", ValueKind::Primitive).optional();
    pub static BACKAZIMUTH_RESIDUAL: Property =
        Property::element("backazimuthResidual", ValueKind::Primitive).optional();
    pub static TIME_USED: Property = Property::element("timeUsed", ValueKind::Primitive).optional();
    pub static HORIZONTAL_SLOWNESS_USED: Property =
        Property::element("horizontalSlownessUsed", ValueKind::Primitive).optional();
    pub static BACKAZIMUTH_USED: Property =
        Property::element("backazimuthUsed", ValueKind::Primitive).optional();
    pub static WEIGHT: Property = Property::element("weight", ValueKind::Primitive).optional();
    pub static EARTH_MODEL_ID: Property =
        Property::element("earthModelID", ValueKind::Primitive).optional();
    pub static PRELIMINARY: Property =
        Property::element("preliminary", ValueKind::Primitive).optional();
    pub static CREATION_INFO: Property =
        Property::element("creationInfo", ValueKind::Object).optional();

    pub static INFO: ClassInfo = ClassInfo::new(
        "Arrival",
        &[
            &PICK_ID,
            &PHASE,
            &TIME_CORRECTION,
            &AZIMUTH,
            &DISTANCE,
            &TAKE_OFF_ANGLE,
            &TIME_RESIDUAL,
            &HORIZONTAL_SLOWNESS_RESIDUAL,
            &BACKAZIMUTH_RESIDUAL,
            &TIME_USED,
            &HORIZONTAL_SLOWNESS_USED,
            &BACKAZIMUTH_USED,
            &WEIGHT,
            &EARTH_MODEL_ID,
            &PRELIMINARY,
            &CREATION_INFO,
        ],
    );
}

mod origin_quality {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static ASSOCIATED_PHASE_COUNT: Property =
        Property::element("associatedPhaseCount", ValueKind::Primitive).optional();
    pub static USED_PHASE_COUNT: Property =
        Property::element("usedPhaseCount", ValueKind::Primitive).optional();
    pub static ASSOCIATED_STATION_COUNT: Property =
        Property::element("associatedStationCount", ValueKind::Primitive).optional();
    pub static USED_STATION_COUNT: Property =
        Property::element("usedStationCount", ValueKind::Primitive).optional();
    pub static DEPTH_PHASE_COUNT: Property =
        Property::element("depthPhaseCount", ValueKind::Primitive).optional();
    pub static STANDARD_ERROR: Property =
        Property::element("standardError", ValueKind::Primitive).optional();
    pub static AZIMUTHAL_GAP: Property =
        Property::element("azimuthalGap", ValueKind::Primitive).optional();
    pub static SECONDARY_AZIMUTHAL_GAP: Property =
        Property::element("secondaryAzimuthalGap", ValueKind::Primitive).optional();
    pub static GROUND_TRUTH_LEVEL: Property =
        Property::element("groundTruthLevel", ValueKind::Primitive).optional();
    pub static MAXIMUM_DISTANCE: Property =
        Property::element("maximumDistance", ValueKind::Primitive).optional();
    pub static MINIMUM_DISTANCE: Property =
        Property::element("minimumDistance", ValueKind::Primitive).optional();
    pub static MEDIAN_DISTANCE: Property =
        Property::element("medianDistance", ValueKind::Primitive).optional();

    pub static INFO: ClassInfo = ClassInfo::new(
        "OriginQuality",
        &[
            &ASSOCIATED_PHASE_COUNT,
            &USED_PHASE_COUNT,
            &ASSOCIATED_STATION_COUNT,
            &USED_STATION_COUNT,
            &DEPTH_PHASE_COUNT,
            &STANDARD_ERROR,
            &AZIMUTHAL_GAP,
            &SECONDARY_AZIMUTHAL_GAP,
            &GROUND_TRUTH_LEVEL,
            &MAXIMUM_DISTANCE,
            &MINIMUM_DISTANCE,
            &MEDIAN_DISTANCE,
        ],
    );
}

mod confidence_ellipsoid {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static SEMI_MAJOR_AXIS_LENGTH: Property =
        Property::element("semiMajorAxisLength", ValueKind::Primitive);
    pub static SEMI_MINOR_AXIS_LENGTH: Property =
        Property::element("semiMinorAxisLength", ValueKind::Primitive);
    pub static SEMI_INTERMEDIATE_AXIS_LENGTH: Property =
        Property::element("semiIntermediateAxisLength", ValueKind::Primitive);
    pub static MAJOR_AXIS_PLUNGE: Property =
        Property::element("majorAxisPlunge", ValueKind::Primitive);
    pub static MAJOR_AXIS_AZIMUTH: Property =
        Property::element("majorAxisAzimuth", ValueKind::Primitive);
    pub static MAJOR_AXIS_ROTATION: Property =
        Property::element("majorAxisRotation", ValueKind::Primitive);

    pub static INFO: ClassInfo = ClassInfo::new(
        "ConfidenceEllipsoid",
        &[
            &SEMI_MAJOR_AXIS_LENGTH,
            &SEMI_MINOR_AXIS_LENGTH,
            &SEMI_INTERMEDIATE_AXIS_LENGTH,
            &MAJOR_AXIS_PLUNGE,
            &MAJOR_AXIS_AZIMUTH,
            &MAJOR_AXIS_ROTATION,
        ],
    );
}

mod origin_uncertainty {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static HORIZONTAL_UNCERTAINTY: Property =
        Property::element("horizontalUncertainty", ValueKind::Primitive).optional();
    pub static MIN_HORIZONTAL_UNCERTAINTY: Property =
        Property::element("minHorizontalUncertainty", ValueKind::Primitive).optional();
    pub static MAX_HORIZONTAL_UNCERTAINTY: Property =
        Property::element("maxHorizontalUncertainty", ValueKind::Primitive).optional();
    pub static AZIMUTH_MAX_HORIZONTAL_UNCERTAINTY: Property =
        Property::element("azimuthMaxHorizontalUncertainty", ValueKind::Primitive).optional();
    pub static CONFIDENCE_ELLIPSOID: Property =
        Property::element("confidenceEllipsoid", ValueKind::Object).optional();
    pub static PREFERRED_DESCRIPTION: Property =
        Property::element("preferredDescription", ValueKind::Enum).optional();
    pub static CONFIDENCE_LEVEL: Property =
        Property::element("confidenceLevel", ValueKind::Primitive).optional();

    pub static INFO: ClassInfo = ClassInfo::new(
        "OriginUncertainty",
        &[
            &HORIZONTAL_UNCERTAINTY,
            &MIN_HORIZONTAL_UNCERTAINTY,
            &MAX_HORIZONTAL_UNCERTAINTY,
            &AZIMUTH_MAX_HORIZONTAL_UNCERTAINTY,
            &CONFIDENCE_ELLIPSOID,
            &PREFERRED_DESCRIPTION,
            &CONFIDENCE_LEVEL,
        ],
    );
}

mod composite_time {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static YEAR: Property = Property::element("year", ValueKind::Object).optional();
    pub static MONTH: Property = Property::element("month", ValueKind::Object).optional();
    pub static DAY: Property = Property::element("day", ValueKind::Object).optional();
    pub static HOUR: Property = Property::element("hour", ValueKind::Object).optional();
    pub static MINUTE: Property = Property::element("minute", ValueKind::Object).optional();
    pub static SECOND: Property = Property::element("second", ValueKind::Object).optional();

    pub static INFO: ClassInfo = ClassInfo::new(
        "CompositeTime",
        &[&YEAR, &MONTH, &DAY, &HOUR, &MINUTE, &SECOND],
    );
}

mod origin {
    use sa_archive::object::PUBLIC_OBJECT;
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static TIME: Property = Property::element("time", ValueKind::Object);
    pub static LATITUDE: Property = Property::element("latitude", ValueKind::Object);
    pub static LONGITUDE: Property = Property::element("longitude", ValueKind::Object);
    pub static DEPTH: Property = Property::element("depth", ValueKind::Object).optional();
    pub static DEPTH_TYPE: Property = Property::element("depthType", ValueKind::Enum).optional();
    pub static TIME_FIXED: Property =
        Property::element("timeFixed", ValueKind::Primitive).optional();
    pub static EPICENTER_FIXED: Property =
        Property::element("epicenterFixed", ValueKind::Primitive).optional();
    pub static REFERENCE_SYSTEM_ID: Property =
        Property::element("referenceSystemID", ValueKind::Primitive).optional();
    pub static METHOD_ID: Property = Property::element("methodID", ValueKind::Primitive).optional();
    pub static EARTH_MODEL_ID: Property =
        Property::element("earthModelID", ValueKind::Primitive).optional();
    pub static QUALITY: Property = Property::element("quality", ValueKind::Object).optional();
    pub static UNCERTAINTY: Property =
        Property::element("uncertainty", ValueKind::Object).optional();
    pub static TYPE: Property = Property::element("type", ValueKind::Enum).optional();
    pub static EVALUATION_MODE: Property =
        Property::element("evaluationMode", ValueKind::Enum).optional();
    pub static EVALUATION_STATUS: Property =
        Property::element("evaluationStatus", ValueKind::Enum).optional();
    pub static CREATION_INFO: Property =
        Property::element("creationInfo", ValueKind::Object).optional();
    pub static COMMENT: Property = Property::element("comment", ValueKind::Object).list();
    pub static COMPOSITE_TIME: Property =
        Property::element("compositeTime", ValueKind::Object).list();
    pub static ARRIVAL: Property = Property::element("arrival", ValueKind::Object).list();
    pub static STATION_MAGNITUDE: Property =
        Property::element("stationMagnitude", ValueKind::Object).list();
    pub static MAGNITUDE: Property = Property::element("magnitude", ValueKind::Object).list();

    pub static INFO: ClassInfo = ClassInfo::new(
        "Origin",
        &[
            &TIME,
            &LATITUDE,
            &LONGITUDE,
            &DEPTH,
            &DEPTH_TYPE,
            &TIME_FIXED,
            &EPICENTER_FIXED,
            &REFERENCE_SYSTEM_ID,
            &METHOD_ID,
            &EARTH_MODEL_ID,
            &QUALITY,
            &UNCERTAINTY,
            &TYPE,
            &EVALUATION_MODE,
            &EVALUATION_STATUS,
            &CREATION_INFO,
            &COMMENT,
            &COMPOSITE_TIME,
            &ARRIVAL,
            &STATION_MAGNITUDE,
            &MAGNITUDE,
        ],
    )
    .with_base(&PUBLIC_OBJECT);
}

// -----------------------------------------------------------------------------
// Arrival

/// The association of a pick with an origin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arrival {
    pub pick_id: Reference<Pick>,
    /// Phase code, e.g. `P` or `PKP`.
    pub phase: String,
    pub time_correction: Option<f64>,
    /// Source to receiver azimuth in degrees.
    pub azimuth: Option<f64>,
    /// Epicentral distance in degrees.
    pub distance: Option<f64>,
    pub take_off_angle: Option<f64>,
    pub time_residual: Option<f64>,
    pub horizontal_slowness_residual: Option<f64>,
    pub backazimuth_residual: Option<f64>,
    pub time_used: Option<bool>,
    pub horizontal_slowness_used: Option<bool>,
    pub backazimuth_used: Option<bool>,
    pub weight: Option<f64>,
    pub earth_model_id: Option<String>,
    pub preliminary: Option<bool>,
    pub creation_info: Option<CreationInfo>,
}

impl Arrival {
    pub fn new(pick_id: &str, phase: impl Into<String>) -> Self {
        Self {
            pick_id: Reference::new(pick_id),
            phase: phase.into(),
            ..Self::default()
        }
    }
}

impl Class for Arrival {
    fn class_info(&self) -> &'static ClassInfo {
        &arrival::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use arrival::*;
        ar.required(&PICK_ID, &mut self.pick_id)?;
        ar.required(&PHASE, &mut self.phase)?;
        ar.optional(&TIME_CORRECTION, &mut self.time_correction)?;
        ar.optional(&AZIMUTH, &mut self.azimuth)?;
        ar.optional(&DISTANCE, &mut self.distance)?;
        ar.optional(&TAKE_OFF_ANGLE, &mut self.take_off_angle)?;
        ar.optional(&TIME_RESIDUAL, &mut self.time_residual)?;
        ar.optional(
            &HORIZONTAL_SLOWNESS_RESIDUAL,
            &mut self.horizontal_slowness_residual,
        )?;
        ar.optional(&BACKAZIMUTH_RESIDUAL, &mut self.backazimuth_residual)?;
        ar.optional(&TIME_USED, &mut self.time_used)?;
        ar.optional(
            &HORIZONTAL_SLOWNESS_USED,
            &mut self.horizontal_slowness_used,
        )?;
        ar.optional(&BACKAZIMUTH_USED, &mut self.backazimuth_used)?;
        ar.optional(&WEIGHT, &mut self.weight)?;
        ar.optional(&EARTH_MODEL_ID, &mut self.earth_model_id)?;
        ar.optional(&PRELIMINARY, &mut self.preliminary)?;
        ar.optional(&CREATION_INFO, &mut self.creation_info)
    }
}

impl_object!(Arrival, arrival::INFO);

// -----------------------------------------------------------------------------
// OriginQuality

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OriginQuality {
    pub associated_phase_count: Option<i64>,
    pub used_phase_count: Option<i64>,
    pub associated_station_count: Option<i64>,
    pub used_station_count: Option<i64>,
    pub depth_phase_count: Option<i64>,
    pub standard_error: Option<f64>,
    pub azimuthal_gap: Option<f64>,
    pub secondary_azimuthal_gap: Option<f64>,
    pub ground_truth_level: Option<String>,
    pub maximum_distance: Option<f64>,
    pub minimum_distance: Option<f64>,
    pub median_distance: Option<f64>,
}

impl Class for OriginQuality {
    fn class_info(&self) -> &'static ClassInfo {
        &origin_quality::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use origin_quality::*;
        ar.optional(&ASSOCIATED_PHASE_COUNT, &mut self.associated_phase_count)?;
        ar.optional(&USED_PHASE_COUNT, &mut self.used_phase_count)?;
        ar.optional(
            &ASSOCIATED_STATION_COUNT,
            &mut self.associated_station_count,
        )?;
        ar.optional(&USED_STATION_COUNT, &mut self.used_station_count)?;
        ar.optional(&DEPTH_PHASE_COUNT, &mut self.depth_phase_count)?;
        ar.optional(&STANDARD_ERROR, &mut self.standard_error)?;
        ar.optional(&AZIMUTHAL_GAP, &mut self.azimuthal_gap)?;
        ar.optional(&SECONDARY_AZIMUTHAL_GAP, &mut self.secondary_azimuthal_gap)?;
        ar.optional(&GROUND_TRUTH_LEVEL, &mut self.ground_truth_level)?;
        ar.optional(&MAXIMUM_DISTANCE, &mut self.maximum_distance)?;
        ar.optional(&MINIMUM_DISTANCE, &mut self.minimum_distance)?;
        ar.optional(&MEDIAN_DISTANCE, &mut self.median_distance)
    }
}

impl_object!(OriginQuality, origin_quality::INFO);

// -----------------------------------------------------------------------------
// OriginUncertainty

/// A 3D error ellipsoid, lengths in meters and angles in degrees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfidenceEllipsoid {
    pub semi_major_axis_length: f64,
    pub semi_minor_axis_length: f64,
    pub semi_intermediate_axis_length: f64,
    pub major_axis_plunge: f64,
    pub major_axis_azimuth: f64,
    pub major_axis_rotation: f64,
}

impl Class for ConfidenceEllipsoid {
    fn class_info(&self) -> &'static ClassInfo {
        &confidence_ellipsoid::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use confidence_ellipsoid::*;
        ar.required(&SEMI_MAJOR_AXIS_LENGTH, &mut self.semi_major_axis_length)?;
        ar.required(&SEMI_MINOR_AXIS_LENGTH, &mut self.semi_minor_axis_length)?;
        ar.required(
            &SEMI_INTERMEDIATE_AXIS_LENGTH,
            &mut self.semi_intermediate_axis_length,
        )?;
        ar.required(&MAJOR_AXIS_PLUNGE, &mut self.major_axis_plunge)?;
        ar.required(&MAJOR_AXIS_AZIMUTH, &mut self.major_axis_azimuth)?;
        ar.required(&MAJOR_AXIS_ROTATION, &mut self.major_axis_rotation)
    }
}

impl_object!(ConfidenceEllipsoid, confidence_ellipsoid::INFO);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OriginUncertainty {
    /// In km.
    pub horizontal_uncertainty: Option<f64>,
    pub min_horizontal_uncertainty: Option<f64>,
    pub max_horizontal_uncertainty: Option<f64>,
    pub azimuth_max_horizontal_uncertainty: Option<f64>,
    pub confidence_ellipsoid: Option<ConfidenceEllipsoid>,
    pub preferred_description: Option<OriginUncertaintyDescription>,
    pub confidence_level: Option<f64>,
}

impl Class for OriginUncertainty {
    fn class_info(&self) -> &'static ClassInfo {
        &origin_uncertainty::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use origin_uncertainty::*;
        ar.optional(&HORIZONTAL_UNCERTAINTY, &mut self.horizontal_uncertainty)?;
        ar.optional(
            &MIN_HORIZONTAL_UNCERTAINTY,
            &mut self.min_horizontal_uncertainty,
        )?;
        ar.optional(
            &MAX_HORIZONTAL_UNCERTAINTY,
            &mut self.max_horizontal_uncertainty,
        )?;
        ar.optional(
            &AZIMUTH_MAX_HORIZONTAL_UNCERTAINTY,
            &mut self.azimuth_max_horizontal_uncertainty,
        )?;
        ar.optional(&CONFIDENCE_ELLIPSOID, &mut self.confidence_ellipsoid)?;
        ar.optional(&PREFERRED_DESCRIPTION, &mut self.preferred_description)?;
        ar.optional(&CONFIDENCE_LEVEL, &mut self.confidence_level)
    }
}

impl_object!(OriginUncertainty, origin_uncertainty::INFO);

// -----------------------------------------------------------------------------
// CompositeTime

/// An origin time given field by field, for historic events whose time is
/// only partly known. Unknown fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositeTime {
    pub year: Option<IntegerQuantity>,
    pub month: Option<IntegerQuantity>,
    pub day: Option<IntegerQuantity>,
    pub hour: Option<IntegerQuantity>,
    pub minute: Option<IntegerQuantity>,
    pub second: Option<RealQuantity>,
}

impl CompositeTime {
    /// The date part only.
    pub fn date(year: i64, month: i64, day: i64) -> Self {
        Self {
            year: Some(IntegerQuantity::new(year)),
            month: Some(IntegerQuantity::new(month)),
            day: Some(IntegerQuantity::new(day)),
            ..Self::default()
        }
    }
}

impl Class for CompositeTime {
    fn class_info(&self) -> &'static ClassInfo {
        &composite_time::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use composite_time::*;
        ar.optional(&YEAR, &mut self.year)?;
        ar.optional(&MONTH, &mut self.month)?;
        ar.optional(&DAY, &mut self.day)?;
        ar.optional(&HOUR, &mut self.hour)?;
        ar.optional(&MINUTE, &mut self.minute)?;
        ar.optional(&SECOND, &mut self.second)
    }
}

impl_object!(CompositeTime, composite_time::INFO);

// -----------------------------------------------------------------------------
// Origin

/// A hypocenter solution.
///
/// An origin owns its arrivals, the station magnitudes computed for it and
/// the network magnitudes derived from those.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Origin {
    pub public_id: PublicId,
    pub time: TimeQuantity,
    /// In degrees.
    pub latitude: RealQuantity,
    /// In degrees.
    pub longitude: RealQuantity,
    /// In km.
    pub depth: Option<RealQuantity>,
    pub depth_type: Option<OriginDepthType>,
    pub time_fixed: Option<bool>,
    pub epicenter_fixed: Option<bool>,
    pub reference_system_id: Option<String>,
    pub method_id: Option<String>,
    pub earth_model_id: Option<String>,
    pub quality: Option<OriginQuality>,
    pub uncertainty: Option<OriginUncertainty>,
    pub kind: Option<OriginType>,
    pub evaluation_mode: Option<EvaluationMode>,
    pub evaluation_status: Option<EvaluationStatus>,
    pub creation_info: Option<CreationInfo>,
    pub comments: Vec<Comment>,
    pub composite_times: Vec<CompositeTime>,
    pub arrivals: Vec<Arrival>,
    pub station_magnitudes: Vec<StationMagnitude>,
    pub magnitudes: Vec<Magnitude>,
}

impl Origin {
    pub fn new(
        public_id: impl Into<PublicId>,
        time: TimeQuantity,
        latitude: RealQuantity,
        longitude: RealQuantity,
    ) -> Self {
        Self {
            public_id: public_id.into(),
            time,
            latitude,
            longitude,
            ..Self::default()
        }
    }

    /// The arrival that associates `pick_id`, if any.
    pub fn arrival_of(&self, pick_id: &str) -> Option<&Arrival> {
        self.arrivals.iter().find(|arrival| arrival.pick_id.id() == pick_id)
    }
}

impl Class for Origin {
    fn class_info(&self) -> &'static ClassInfo {
        &origin::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use origin::*;
        visit_public_object(&mut self.public_id, ar)?;
        ar.required(&TIME, &mut self.time)?;
        ar.required(&LATITUDE, &mut self.latitude)?;
        ar.required(&LONGITUDE, &mut self.longitude)?;
        ar.optional(&DEPTH, &mut self.depth)?;
        ar.optional(&DEPTH_TYPE, &mut self.depth_type)?;
        ar.optional(&TIME_FIXED, &mut self.time_fixed)?;
        ar.optional(&EPICENTER_FIXED, &mut self.epicenter_fixed)?;
        ar.optional(&REFERENCE_SYSTEM_ID, &mut self.reference_system_id)?;
        ar.optional(&METHOD_ID, &mut self.method_id)?;
        ar.optional(&EARTH_MODEL_ID, &mut self.earth_model_id)?;
        ar.optional(&QUALITY, &mut self.quality)?;
        ar.optional(&UNCERTAINTY, &mut self.uncertainty)?;
        ar.optional(&TYPE, &mut self.kind)?;
        ar.optional(&EVALUATION_MODE, &mut self.evaluation_mode)?;
        ar.optional(&EVALUATION_STATUS, &mut self.evaluation_status)?;
        ar.optional(&CREATION_INFO, &mut self.creation_info)?;
        ar.list(&COMMENT, &mut self.comments)?;
        ar.list(&COMPOSITE_TIME, &mut self.composite_times)?;
        ar.list(&ARRIVAL, &mut self.arrivals)?;
        ar.list(&STATION_MAGNITUDE, &mut self.station_magnitudes)?;
        ar.list(&MAGNITUDE, &mut self.magnitudes)
    }
}

impl_object!(Origin, origin::INFO);
