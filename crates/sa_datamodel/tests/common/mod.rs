#![allow(dead_code)]

use sa_archive::value::Time;
use sa_datamodel::{
    Amplitude, Arrival, Comment, CompositeTime, CreationInfo, Event, EventDescription,
    EventDescriptionType, EventParameters, EventType, FocalMechanism, IntegerQuantity, Magnitude,
    MomentTensor, MomentTensorComponentContribution, MomentTensorStationContribution, NodalPlane,
    NodalPlanes, Origin, Pick, PreferredPlane, Reading, RealQuantity, StationMagnitude,
    StationMagnitudeContribution, Tensor, TimeQuantity, WaveformStreamId,
};
use sa_archive::Reference;

/// The sample catalog: one event, ten origins and fourteen focal mechanisms.
pub const CATALOG: &[u8] = include_bytes!("../data/catalog.xml");

/// The preferred origin of the sample catalog.
pub const PREFERRED_ORIGIN: &str = "Origin/20210430094923.406014.99645";

/// Wrap `body` in a root element of `version`.
pub fn document(version: &str, body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<seiscomp xmlns="http://geofon.gfz-potsdam.de/ns/seiscomp3-schema/{version}" version="{version}">{body}</seiscomp>"#
    )
}

/// Wrap `body` in a root and an `EventParameters` element.
pub fn parameters(version: &str, body: &str) -> String {
    document(
        version,
        &format!("<EventParameters>{body}</EventParameters>"),
    )
}

pub fn time(second: u32, micro: u32) -> Time {
    Time::from_ymd_hms_micro(2021, 4, 30, 9, 49, second, micro).unwrap_or_default()
}

pub fn pick(id: &str, station: &str) -> Pick {
    let mut pick = Pick::new(
        id,
        TimeQuantity::new(time(40, 137_053)),
        WaveformStreamId::new("GE", station, "", "BHZ"),
    );
    pick.phase_hint = Some("P".to_string());
    pick
}

/// A small catalog that sets values of every kind, nested objects included.
pub fn sample() -> EventParameters {
    let mut parameters = EventParameters::new();
    parameters.picks.push(pick("Pick/1", "UGM"));
    parameters.picks.push(pick("Pick/2", "JAGI"));

    let mut amplitude = Amplitude::new("Amplitude/1", "mb");
    amplitude.amplitude = Some(RealQuantity::new(1.25e-7));
    amplitude.unit = Some("m".to_string());
    amplitude.pick_id = Some(Reference::new("Pick/1"));
    parameters.amplitudes.push(amplitude);

    let mut reading = Reading::new("Reading/1");
    reading.add_pick_reference("Pick/1");
    reading.add_pick_reference("Pick/2");
    reading.add_amplitude_reference("Amplitude/1");
    parameters.readings.push(reading);

    let mut origin = Origin::new(
        "Origin/1",
        TimeQuantity::new(time(23, 406_014)),
        RealQuantity::new(-7.95).with_uncertainty(3.1),
        RealQuantity::new(110.39),
    );
    origin.depth = Some(RealQuantity::new(10.0));
    origin.time_fixed = Some(false);
    origin.comments.push(Comment::new("Felt in Yogyakarta"));
    origin.creation_info = Some(CreationInfo {
        agency_id: Some("GFZ".to_string()),
        creation_time: Some(time(59, 0)),
        ..CreationInfo::default()
    });
    let mut composite = CompositeTime::date(2021, 4, 30);
    composite.hour = Some(IntegerQuantity::new(9));
    composite.second = Some(RealQuantity::new(23.4).with_uncertainty(0.5));
    origin.composite_times.push(composite);
    origin.arrivals.push(Arrival::new("Pick/1", "P"));
    origin.arrivals.push(Arrival::new("Pick/2", "P"));

    let mut station_magnitude = StationMagnitude::new("StationMagnitude/1", RealQuantity::new(4.7));
    station_magnitude.origin_id = Some(Reference::new("Origin/1"));
    station_magnitude.amplitude_id = Some(Reference::new("Amplitude/1"));
    station_magnitude.passed_qc = Some(true);
    origin.station_magnitudes.push(station_magnitude);

    let mut magnitude = Magnitude::new("Magnitude/1", RealQuantity::new(4.8));
    magnitude.kind = Some("mb".to_string());
    magnitude
        .station_magnitude_contributions
        .push(StationMagnitudeContribution::new("StationMagnitude/1"));
    origin.magnitudes.push(magnitude);
    parameters.origins.push(origin);

    let mut mechanism = FocalMechanism::new("FocalMechanism/1");
    mechanism.triggering_origin_id = Some(Reference::new("Origin/1"));
    mechanism.nodal_planes = Some(NodalPlanes {
        nodal_plane_1: Some(NodalPlane::new(120.0, 40.0, 88.0)),
        nodal_plane_2: Some(NodalPlane::new(302.0, 50.0, 92.0)),
        preferred_plane: Some(PreferredPlane::Second),
    });
    let mut tensor = MomentTensor::new("MomentTensor/1", "Origin/1");
    tensor.moment_magnitude_id = Some(Reference::new("Magnitude/1"));
    tensor.tensor = Some(Tensor::from_components([
        1.95e16, -7.4e15, -1.21e16, 3.3e15, -5.1e15, 8.8e14,
    ]));
    let mut contribution = MomentTensorStationContribution::new("MomentTensor/1/GE.UGM", true);
    contribution.components.push(MomentTensorComponentContribution {
        phase_code: "P".to_string(),
        component: 2,
        active: true,
        weight: 1.0,
        time_shift: 0.5,
        data_time_window: vec![-10.0, 60.5, 0.025].into(),
        misfit: Some(0.3),
        snr: None,
    });
    tensor.station_contributions.push(contribution);
    mechanism.moment_tensors.push(tensor);
    parameters.focal_mechanisms.push(mechanism);

    let mut event = Event::new("Event/1");
    event.preferred_origin_id = Some(Reference::new("Origin/1"));
    event.preferred_magnitude_id = Some(Reference::new("Magnitude/1"));
    event.preferred_focal_mechanism_id = Some(Reference::new("FocalMechanism/1"));
    event.kind = Some(EventType::Earthquake);
    event
        .descriptions
        .push(EventDescription::new("Java, Indonesia", EventDescriptionType::RegionName));
    event.add_origin_reference("Origin/1");
    event.add_focal_mechanism_reference("FocalMechanism/1");
    parameters.events.push(event);

    parameters
}
