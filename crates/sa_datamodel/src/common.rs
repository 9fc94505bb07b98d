//! Value types shared by the public objects.

use sa_archive::value::Time;
use sa_archive::{Archive, ArchiveError, Class, ClassInfo, impl_object};

// -----------------------------------------------------------------------------
// Descriptors

mod time_quantity {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static VALUE: Property = Property::element("value", ValueKind::Timestamp);
    pub static UNCERTAINTY: Property =
        Property::element("uncertainty", ValueKind::Primitive).optional();
    pub static LOWER_UNCERTAINTY: Property =
        Property::element("lowerUncertainty", ValueKind::Primitive).optional();
    pub static UPPER_UNCERTAINTY: Property =
        Property::element("upperUncertainty", ValueKind::Primitive).optional();
    pub static CONFIDENCE_LEVEL: Property =
        Property::element("confidenceLevel", ValueKind::Primitive).optional();

    pub static INFO: ClassInfo = ClassInfo::new(
        "TimeQuantity",
        &[&VALUE, &UNCERTAINTY, &LOWER_UNCERTAINTY, &UPPER_UNCERTAINTY, &CONFIDENCE_LEVEL],
    );
}

mod real_quantity {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static VALUE: Property = Property::element("value", ValueKind::Primitive);

    pub static INFO: ClassInfo = ClassInfo::new(
        "RealQuantity",
        &[
            &VALUE,
            &super::time_quantity::UNCERTAINTY,
            &super::time_quantity::LOWER_UNCERTAINTY,
            &super::time_quantity::UPPER_UNCERTAINTY,
            &super::time_quantity::CONFIDENCE_LEVEL,
        ],
    );
}

mod integer_quantity {
    use sa_archive::ClassInfo;

    pub static INFO: ClassInfo = ClassInfo::new(
        "IntegerQuantity",
        &[
            &super::real_quantity::VALUE,
            &super::time_quantity::UNCERTAINTY,
            &super::time_quantity::LOWER_UNCERTAINTY,
            &super::time_quantity::UPPER_UNCERTAINTY,
            &super::time_quantity::CONFIDENCE_LEVEL,
        ],
    );
}

mod creation_info {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static AGENCY_ID: Property = Property::element("agencyID", ValueKind::Primitive).optional();
    pub static AGENCY_URI: Property =
        Property::element("agencyURI", ValueKind::Primitive).optional();
    pub static AUTHOR: Property = Property::element("author", ValueKind::Primitive).optional();
    pub static AUTHOR_URI: Property =
        Property::element("authorURI", ValueKind::Primitive).optional();
    pub static CREATION_TIME: Property =
        Property::element("creationTime", ValueKind::Timestamp).optional();
    pub static MODIFICATION_TIME: Property =
        Property::element("modificationTime", ValueKind::Timestamp).optional();
    pub static VERSION: Property = Property::element("version", ValueKind::Primitive).optional();

    pub static INFO: ClassInfo = ClassInfo::new(
        "CreationInfo",
        &[
            &AGENCY_ID,
            &AGENCY_URI,
            &AUTHOR,
            &AUTHOR_URI,
            &CREATION_TIME,
            &MODIFICATION_TIME,
            &VERSION,
        ],
    );
}

mod comment {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static TEXT: Property = Property::element("text", ValueKind::Primitive);
    pub static ID: Property = Property::element("id", ValueKind::Primitive).optional();
    pub static START: Property = Property::element("start", ValueKind::Timestamp)
        .optional()
        .since(0, 10);
    pub static END: Property = Property::element("end", ValueKind::Timestamp)
        .optional()
        .since(0, 10);
    pub static CREATION_INFO: Property =
        Property::element("creationInfo", ValueKind::Object).optional();

    pub static INFO: ClassInfo =
        ClassInfo::new("Comment", &[&TEXT, &ID, &START, &END, &CREATION_INFO]);
}

mod waveform_stream_id {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static NETWORK_CODE: Property = Property::attribute("networkCode", ValueKind::Primitive);
    pub static STATION_CODE: Property = Property::attribute("stationCode", ValueKind::Primitive);
    pub static LOCATION_CODE: Property =
        Property::attribute("locationCode", ValueKind::Primitive).optional();
    pub static CHANNEL_CODE: Property =
        Property::attribute("channelCode", ValueKind::Primitive).optional();
    pub static RESOURCE_URI: Property =
        Property::text("resourceURI", ValueKind::Primitive).optional();

    pub static INFO: ClassInfo = ClassInfo::new(
        "WaveformStreamID",
        &[&NETWORK_CODE, &STATION_CODE, &LOCATION_CODE, &CHANNEL_CODE, &RESOURCE_URI],
    );
}

mod time_window {
    use sa_archive::{ClassInfo, Property, ValueKind};

    pub static REFERENCE: Property = Property::element("reference", ValueKind::Timestamp);
    pub static BEGIN: Property = Property::element("begin", ValueKind::Primitive);
    pub static END: Property = Property::element("end", ValueKind::Primitive);

    pub static INFO: ClassInfo = ClassInfo::new("TimeWindow", &[&REFERENCE, &BEGIN, &END]);
}

// -----------------------------------------------------------------------------
// Quantities

/// A point in time with optional uncertainties in seconds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeQuantity {
    pub value: Time,
    pub uncertainty: Option<f64>,
    pub lower_uncertainty: Option<f64>,
    pub upper_uncertainty: Option<f64>,
    pub confidence_level: Option<f64>,
}

impl TimeQuantity {
    #[inline]
    pub fn new(value: Time) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }
}

impl Class for TimeQuantity {
    fn class_info(&self) -> &'static ClassInfo {
        &time_quantity::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use time_quantity::*;
        ar.required(&VALUE, &mut self.value)?;
        ar.optional(&UNCERTAINTY, &mut self.uncertainty)?;
        ar.optional(&LOWER_UNCERTAINTY, &mut self.lower_uncertainty)?;
        ar.optional(&UPPER_UNCERTAINTY, &mut self.upper_uncertainty)?;
        ar.optional(&CONFIDENCE_LEVEL, &mut self.confidence_level)
    }
}

impl_object!(TimeQuantity, time_quantity::INFO);

/// A real number with optional uncertainties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RealQuantity {
    pub value: f64,
    pub uncertainty: Option<f64>,
    pub lower_uncertainty: Option<f64>,
    pub upper_uncertainty: Option<f64>,
    pub confidence_level: Option<f64>,
}

impl RealQuantity {
    #[inline]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_uncertainty(mut self, uncertainty: f64) -> Self {
        self.uncertainty = Some(uncertainty);
        self
    }
}

impl Class for RealQuantity {
    fn class_info(&self) -> &'static ClassInfo {
        &real_quantity::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use time_quantity::{CONFIDENCE_LEVEL, LOWER_UNCERTAINTY, UNCERTAINTY, UPPER_UNCERTAINTY};
        ar.required(&real_quantity::VALUE, &mut self.value)?;
        ar.optional(&UNCERTAINTY, &mut self.uncertainty)?;
        ar.optional(&LOWER_UNCERTAINTY, &mut self.lower_uncertainty)?;
        ar.optional(&UPPER_UNCERTAINTY, &mut self.upper_uncertainty)?;
        ar.optional(&CONFIDENCE_LEVEL, &mut self.confidence_level)
    }
}

impl_object!(RealQuantity, real_quantity::INFO);

/// An integer with optional uncertainties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegerQuantity {
    pub value: i64,
    pub uncertainty: Option<i64>,
    pub lower_uncertainty: Option<i64>,
    pub upper_uncertainty: Option<i64>,
    pub confidence_level: Option<f64>,
}

impl IntegerQuantity {
    #[inline]
    pub fn new(value: i64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }
}

impl Class for IntegerQuantity {
    fn class_info(&self) -> &'static ClassInfo {
        &integer_quantity::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use time_quantity::{CONFIDENCE_LEVEL, LOWER_UNCERTAINTY, UNCERTAINTY, UPPER_UNCERTAINTY};
        ar.required(&real_quantity::VALUE, &mut self.value)?;
        ar.optional(&UNCERTAINTY, &mut self.uncertainty)?;
        ar.optional(&LOWER_UNCERTAINTY, &mut self.lower_uncertainty)?;
        ar.optional(&UPPER_UNCERTAINTY, &mut self.upper_uncertainty)?;
        ar.optional(&CONFIDENCE_LEVEL, &mut self.confidence_level)
    }
}

impl_object!(IntegerQuantity, integer_quantity::INFO);

// -----------------------------------------------------------------------------
// CreationInfo

/// Who created an object, and when.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreationInfo {
    pub agency_id: Option<String>,
    pub agency_uri: Option<String>,
    pub author: Option<String>,
    pub author_uri: Option<String>,
    pub creation_time: Option<Time>,
    pub modification_time: Option<Time>,
    pub version: Option<String>,
}

impl Class for CreationInfo {
    fn class_info(&self) -> &'static ClassInfo {
        &creation_info::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use creation_info::*;
        ar.optional(&AGENCY_ID, &mut self.agency_id)?;
        ar.optional(&AGENCY_URI, &mut self.agency_uri)?;
        ar.optional(&AUTHOR, &mut self.author)?;
        ar.optional(&AUTHOR_URI, &mut self.author_uri)?;
        ar.optional(&CREATION_TIME, &mut self.creation_time)?;
        ar.optional(&MODIFICATION_TIME, &mut self.modification_time)?;
        ar.optional(&VERSION, &mut self.version)
    }
}

impl_object!(CreationInfo, creation_info::INFO);

// -----------------------------------------------------------------------------
// Comment

/// A free text note attached to an object.
///
/// `start` and `end` exist since schema 0.10.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comment {
    pub text: String,
    pub id: Option<String>,
    pub start: Option<Time>,
    pub end: Option<Time>,
    pub creation_info: Option<CreationInfo>,
}

impl Comment {
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl Class for Comment {
    fn class_info(&self) -> &'static ClassInfo {
        &comment::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use comment::*;
        ar.required(&TEXT, &mut self.text)?;
        ar.optional(&ID, &mut self.id)?;
        ar.optional(&START, &mut self.start)?;
        ar.optional(&END, &mut self.end)?;
        ar.optional(&CREATION_INFO, &mut self.creation_info)
    }
}

impl_object!(Comment, comment::INFO);

// -----------------------------------------------------------------------------
// WaveformStreamId

/// Identifies a data stream by its SEED codes.
///
/// The codes are attributes, an optional resource URI is the element text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WaveformStreamId {
    pub network_code: String,
    pub station_code: String,
    pub location_code: Option<String>,
    pub channel_code: Option<String>,
    pub resource_uri: Option<String>,
}

impl WaveformStreamId {
    pub fn new(network: &str, station: &str, location: &str, channel: &str) -> Self {
        Self {
            network_code: network.to_string(),
            station_code: station.to_string(),
            location_code: Some(location.to_string()),
            channel_code: Some(channel.to_string()),
            resource_uri: None,
        }
    }
}

impl core::fmt::Display for WaveformStreamId {
    /// `NET.STA.LOC.CHA`
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.network_code,
            self.station_code,
            self.location_code.as_deref().unwrap_or_default(),
            self.channel_code.as_deref().unwrap_or_default(),
        )
    }
}

impl Class for WaveformStreamId {
    fn class_info(&self) -> &'static ClassInfo {
        &waveform_stream_id::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use waveform_stream_id::*;
        ar.required(&NETWORK_CODE, &mut self.network_code)?;
        ar.required(&STATION_CODE, &mut self.station_code)?;
        ar.optional(&LOCATION_CODE, &mut self.location_code)?;
        ar.optional(&CHANNEL_CODE, &mut self.channel_code)?;
        ar.optional(&RESOURCE_URI, &mut self.resource_uri)
    }
}

impl_object!(WaveformStreamId, waveform_stream_id::INFO);

// -----------------------------------------------------------------------------
// TimeWindow

/// A window of `begin` seconds before and `end` seconds after `reference`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeWindow {
    pub reference: Time,
    pub begin: f64,
    pub end: f64,
}

impl Class for TimeWindow {
    fn class_info(&self) -> &'static ClassInfo {
        &time_window::INFO
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        use time_window::*;
        ar.required(&REFERENCE, &mut self.reference)?;
        ar.required(&BEGIN, &mut self.begin)?;
        ar.required(&END, &mut self.end)
    }
}

impl_object!(TimeWindow, time_window::INFO);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_id_display() {
        let mut id = WaveformStreamId::new("GE", "APE", "", "BHZ");
        assert_eq!(id.to_string(), "GE.APE..BHZ");

        id.channel_code = None;
        assert_eq!(id.to_string(), "GE.APE..");
    }

    #[test]
    fn quantity_builders() {
        let q = RealQuantity::new(10.5).with_uncertainty(0.5);
        assert_eq!(q.value, 10.5);
        assert_eq!(q.uncertainty, Some(0.5));
        assert_eq!(q.lower_uncertainty, None);

        assert_eq!(IntegerQuantity::new(3).value, 3);
        assert_eq!(TimeQuantity::new(Time::EPOCH).value, Time::EPOCH);
    }
}
