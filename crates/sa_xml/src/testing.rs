//! A small object model for the reader and writer tests.

use sa_archive::object::{PUBLIC_OBJECT, visit_public_object};
use sa_archive::value::Time;
use sa_archive::{
    Archive, ArchiveError, Class, ClassInfo, Property, PublicId, TypeRegistry, ValueKind,
    enumeration, impl_object,
};

enumeration! {
    pub enum Onset {
        Emergent => "emergent",
        Impulsive => "impulsive",
        #[default]
        Questionable => "questionable",
    }
}

// -----------------------------------------------------------------------------
// RealQuantity

static VALUE: Property = Property::element("value", ValueKind::Primitive);
static UNCERTAINTY: Property = Property::element("uncertainty", ValueKind::Primitive).optional();
static REAL_QUANTITY: ClassInfo = ClassInfo::new("RealQuantity", &[&VALUE, &UNCERTAINTY]);

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RealQuantity {
    pub value: f64,
    pub uncertainty: Option<f64>,
}

impl Class for RealQuantity {
    fn class_info(&self) -> &'static ClassInfo {
        &REAL_QUANTITY
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        ar.required(&VALUE, &mut self.value)?;
        ar.optional(&UNCERTAINTY, &mut self.uncertainty)
    }
}

impl_object!(RealQuantity, REAL_QUANTITY);

// -----------------------------------------------------------------------------
// StreamId

static STATION: Property = Property::attribute("stationCode", ValueKind::Primitive);
static LOCATION: Property = Property::attribute("locationCode", ValueKind::Primitive).optional();
static URI: Property = Property::text("resourceURI", ValueKind::Primitive).optional();
static STREAM_ID: ClassInfo = ClassInfo::new("WaveformStreamID", &[&STATION, &LOCATION, &URI]);

#[derive(Debug, Default, Clone, PartialEq)]
pub struct StreamId {
    pub station: String,
    pub location: Option<String>,
    pub uri: Option<String>,
}

impl Class for StreamId {
    fn class_info(&self) -> &'static ClassInfo {
        &STREAM_ID
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        ar.required(&STATION, &mut self.station)?;
        ar.optional(&LOCATION, &mut self.location)?;
        ar.optional(&URI, &mut self.uri)
    }
}

impl_object!(StreamId, STREAM_ID);

// -----------------------------------------------------------------------------
// Pick

static TIME: Property = Property::element("time", ValueKind::Object);
static STREAM: Property = Property::element("waveformID", ValueKind::Object);
static CREATED: Property = Property::element("creationTime", ValueKind::Timestamp).optional();
static ONSET: Property = Property::element("onset", ValueKind::Enum).optional();
static SLOWNESS: Property = Property::element("horizontalSlowness", ValueKind::Object).optional();
static TAGS: Property = Property::element("tag", ValueKind::Primitive).list();
static FILTER: Property = Property::element("filterID", ValueKind::Primitive)
    .optional()
    .since(0, 10);
static PICK: ClassInfo = ClassInfo::new(
    "Pick",
    &[&TIME, &STREAM, &CREATED, &ONSET, &SLOWNESS, &TAGS, &FILTER],
)
.with_base(&PUBLIC_OBJECT);

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Pick {
    pub public_id: PublicId,
    pub time: RealQuantity,
    pub stream: StreamId,
    pub created: Option<Time>,
    pub onset: Option<Onset>,
    pub slowness: Option<RealQuantity>,
    pub tags: Vec<String>,
    pub filter: Option<String>,
}

impl Class for Pick {
    fn class_info(&self) -> &'static ClassInfo {
        &PICK
    }

    fn visit(&mut self, ar: &mut dyn Archive) -> Result<(), ArchiveError> {
        visit_public_object(&mut self.public_id, ar)?;
        ar.required(&TIME, &mut self.time)?;
        ar.required(&STREAM, &mut self.stream)?;
        ar.optional(&CREATED, &mut self.created)?;
        ar.optional(&ONSET, &mut self.onset)?;
        ar.optional(&SLOWNESS, &mut self.slowness)?;
        ar.list(&TAGS, &mut self.tags)?;
        ar.optional(&FILTER, &mut self.filter)
    }
}

impl_object!(Pick, PICK);

impl Pick {
    pub fn sample(id: &str) -> Self {
        Self {
            public_id: PublicId::new(id),
            time: RealQuantity {
                value: 1.5,
                uncertainty: Some(0.25),
            },
            stream: StreamId {
                station: "APE".to_string(),
                location: None,
                uri: Some("smi:ge/APE?a=1&b=2".to_string()),
            },
            created: Time::from_ymd_hms_micro(2021, 4, 30, 9, 49, 23, 406_014),
            onset: Some(Onset::Impulsive),
            slowness: None,
            tags: vec!["first".to_string(), "second".to_string()],
            filter: Some("BW(3,0.7,2)".to_string()),
        }
    }
}

/// A registry with every test class.
pub fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register::<Pick>();
    registry.register::<RealQuantity>();
    registry.register::<StreamId>();
    registry
}

/// Wrap `body` in a root element of `version`.
pub fn document(version: &str, body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<seiscomp xmlns="http://geofon.gfz-potsdam.de/ns/seiscomp3-schema/{version}" version="{version}">{body}</seiscomp>"#
    )
}
