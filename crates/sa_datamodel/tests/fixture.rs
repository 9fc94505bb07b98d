mod common;

use std::collections::HashSet;

use sa_archive::SchemaVersion;
use sa_datamodel::{Document, EventType, FocalMechanism, MomentTensor, Origin, Pick, PreferredPlane};

use common::{CATALOG, PREFERRED_ORIGIN};

#[test]
fn sample_catalog() {
    let (document, diagnostics) = Document::load(CATALOG).unwrap();
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
    assert_eq!(document.version(), SchemaVersion::new(0, 11));

    assert_eq!(document.events().len(), 1);
    assert_eq!(document.origins().len(), 10);
    assert_eq!(document.focal_mechanisms().len(), 14);

    let event = &document.events()[0];
    assert_eq!(event.kind, Some(EventType::Earthquake));
    let preferred = document.preferred_origin(event).unwrap();
    assert_eq!(preferred.public_id, PREFERRED_ORIGIN);
    assert!(
        document
            .origins()
            .iter()
            .any(|origin| core::ptr::eq(origin, preferred))
    );

    let magnitude = document.preferred_magnitude(event).unwrap();
    assert_eq!(magnitude.kind.as_deref(), Some("M"));
    assert_eq!(magnitude.origin_id.as_ref().unwrap().id(), PREFERRED_ORIGIN);

    let mechanism = document.preferred_focal_mechanism(event).unwrap();
    let planes = mechanism.nodal_planes.as_ref().unwrap();
    assert_eq!(planes.preferred_plane, Some(PreferredPlane::Second));
    assert_eq!(planes.preferred().unwrap().strike.value, 305.0);

    assert!(document.event_origins(event).all(|origin| origin.is_some()));
    assert_eq!(document.event_focal_mechanisms(event).flatten().count(), 14);
}

#[test]
fn every_pick_is_referenced() {
    let (document, _) = Document::load(CATALOG).unwrap();
    assert!(!document.picks().is_empty());

    let mut referenced = HashSet::new();
    for origin in document.origins() {
        for arrival in &origin.arrivals {
            referenced.insert(document.arrival_pick(arrival).unwrap().public_id.as_str());
        }
    }
    for amplitude in document.amplitudes() {
        referenced.insert(document.amplitude_pick(amplitude).unwrap().public_id.as_str());
    }

    for pick in document.picks() {
        assert!(
            referenced.contains(pick.public_id.as_str()),
            "{} is unused",
            pick.public_id
        );
    }
}

#[test]
fn index_statistics() {
    let (document, _) = Document::load(CATALOG).unwrap();
    let index = document.index();

    assert_eq!(index.count_of("Pick"), document.picks().len());
    assert_eq!(index.count_of("Origin"), 10);
    assert_eq!(index.count_of("FocalMechanism"), 14);
    assert_eq!(index.count_of("Event"), 1);

    let tensors: usize = document
        .focal_mechanisms()
        .iter()
        .map(|mechanism| mechanism.moment_tensors.len())
        .sum();
    assert_eq!(index.count_of("MomentTensor"), tensors);
    assert_eq!(
        index.count_of("MomentTensorStationContribution"),
        tensors * 2
    );

    let origin = document.find::<Origin>(PREFERRED_ORIGIN).unwrap();
    assert_eq!(origin.method_id.as_deref(), Some("NonLinLoc"));
    assert!(document.find::<Pick>(PREFERRED_ORIGIN).is_none());
    assert!(document.find::<FocalMechanism>("FocalMechanism/unknown").is_none());
}

#[test]
fn moment_tensor_details() {
    let (document, _) = Document::load(CATALOG).unwrap();
    let event = &document.events()[0];
    let mechanism = document.preferred_focal_mechanism(event).unwrap();
    let tensor: &MomentTensor = &mechanism.moment_tensors[0];

    let derived = document.resolve(&tensor.derived_origin_id).unwrap();
    assert_eq!(derived.public_id, PREFERRED_ORIGIN);
    assert_eq!(tensor.scalar_moment.as_ref().unwrap().value, 2.8e16);
    assert_eq!(tensor.tensor.as_ref().unwrap().mrr.value, 1.95e16);

    let contribution = &tensor.station_contributions[0];
    assert!(contribution.active);
    assert_eq!(contribution.components.len(), 3);
    assert!(!contribution.components[2].active);
    assert_eq!(
        contribution.components[0].data_time_window.as_slice(),
        &[-10.0, 60.5, 0.025]
    );
}
