mod common;

use sa_archive::archive::ReadOptions;
use sa_archive::resolve::DuplicatePolicy;
use sa_archive::{Diagnostic, DiagnosticKind};
use sa_datamodel::{Document, Magnitude, Origin, Pick};

use common::{CATALOG, PREFERRED_ORIGIN, parameters};

/// Remove every `<pick>` element of the sample catalog.
fn without_picks() -> String {
    let text = core::str::from_utf8(CATALOG).unwrap();
    let mut out = String::with_capacity(text.len());
    let mut skipping = false;
    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("<pick ") {
            skipping = true;
        }
        if !skipping {
            out.push_str(line);
            out.push('\n');
        }
        if trimmed.starts_with("</pick>") {
            skipping = false;
        }
    }
    out
}

#[test]
fn partial_document() {
    let xml = without_picks();
    let (document, diagnostics) = Document::load(xml.as_bytes()).unwrap();

    assert!(document.picks().is_empty());
    assert_eq!(document.origins().len(), 10);

    let arrivals: usize = document.origins().iter().map(|o| o.arrivals.len()).sum();
    assert!(arrivals > 0);
    for origin in document.origins() {
        for arrival in &origin.arrivals {
            assert!(!arrival.pick_id.is_resolved());
            assert!(document.arrival_pick(arrival).is_none());
        }
    }
    for amplitude in document.amplitudes() {
        assert!(document.amplitude_pick(amplitude).is_none());
    }

    // Arrivals and amplitudes dangle, nothing else.
    let dangling = arrivals + document.amplitudes().len();
    assert_eq!(
        diagnostics.count(DiagnosticKind::DanglingReference),
        dangling
    );
    assert_eq!(diagnostics.len(), dangling);

    let event = &document.events()[0];
    assert_eq!(
        document.preferred_origin(event).unwrap().public_id,
        PREFERRED_ORIGIN
    );
}

#[test]
fn dangling_reference_keeps_its_id() {
    let body = r#"
    <event publicID="Event/1">
      <preferredOriginID>Origin/404</preferredOriginID>
    </event>"#;
    let (document, diagnostics) = Document::load(parameters("0.11", body).as_bytes()).unwrap();

    let event = &document.events()[0];
    let reference = event.preferred_origin_id.as_ref().unwrap();
    assert_eq!(reference.id(), "Origin/404");
    assert!(!reference.is_resolved());
    assert!(document.preferred_origin(event).is_none());

    assert_eq!(
        diagnostics.as_slice(),
        &[Diagnostic::DanglingReference {
            class: "Event",
            property: "preferredOriginID",
            id: "Origin/404".to_string(),
            expected: "Origin",
            found: None,
            path: "EventParameters/event[0]".to_string(),
        }]
    );
}

#[test]
fn mistyped_reference() {
    let body = r#"
    <pick publicID="Shared/1">
      <time><value>2021-04-30T09:49:40.137053Z</value></time>
      <waveformID networkCode="GE" stationCode="UGM"/>
    </pick>
    <event publicID="Event/1">
      <preferredOriginID>Shared/1</preferredOriginID>
    </event>"#;
    let (document, diagnostics) = Document::load(parameters("0.11", body).as_bytes()).unwrap();

    let event = &document.events()[0];
    assert!(document.preferred_origin(event).is_none());
    assert!(document.find::<Origin>("Shared/1").is_none());
    assert!(document.find::<Pick>("Shared/1").is_some());
    assert!(matches!(
        diagnostics.as_slice(),
        [Diagnostic::DanglingReference {
            expected: "Origin",
            found: Some("Pick"),
            ..
        }]
    ));
}

const DUPLICATES: &str = r#"
    <origin publicID="Origin/1">
      <time><value>2021-04-30T09:49:23.406014Z</value></time>
      <latitude><value>-7.95</value></latitude>
      <longitude><value>110.39</value></longitude>
      <magnitude publicID="Magnitude/1"><magnitude><value>4.8</value></magnitude></magnitude>
    </origin>
    <origin publicID="Origin/1">
      <time><value>2021-04-30T09:49:24.000000Z</value></time>
      <latitude><value>-7.96</value></latitude>
      <longitude><value>110.4</value></longitude>
      <magnitude publicID="Magnitude/1"><magnitude><value>4.9</value></magnitude></magnitude>
    </origin>
    <event publicID="Event/1">
      <preferredOriginID>Origin/1</preferredOriginID>
      <preferredMagnitudeID>Magnitude/1</preferredMagnitudeID>
    </event>"#;

#[test]
fn duplicate_ids_last_wins() {
    let (document, diagnostics) =
        Document::load(parameters("0.11", DUPLICATES).as_bytes()).unwrap();
    assert_eq!(document.duplicate_policy(), DuplicatePolicy::LastWins);

    // Both objects are kept.
    assert_eq!(document.origins().len(), 2);
    assert_eq!(diagnostics.count(DiagnosticKind::DuplicatePublicId), 2);

    let event = &document.events()[0];
    assert_eq!(
        document.preferred_origin(event).unwrap().latitude.value,
        -7.96
    );
    assert_eq!(
        document.preferred_magnitude(event).unwrap().magnitude.value,
        4.9
    );
    assert_eq!(
        document.find::<Magnitude>("Magnitude/1").unwrap().magnitude.value,
        4.9
    );
}

#[test]
fn duplicate_ids_first_wins() {
    let options = ReadOptions::new().with_duplicates(DuplicatePolicy::FirstWins);
    let (document, diagnostics) =
        Document::load_with(parameters("0.11", DUPLICATES).as_bytes(), options).unwrap();
    assert_eq!(document.duplicate_policy(), DuplicatePolicy::FirstWins);

    assert_eq!(document.origins().len(), 2);
    assert!(matches!(
        diagnostics.as_slice()[0],
        Diagnostic::DuplicatePublicId {
            policy: DuplicatePolicy::FirstWins,
            ..
        }
    ));

    let event = &document.events()[0];
    assert_eq!(
        document.preferred_origin(event).unwrap().latitude.value,
        -7.95
    );
    assert_eq!(
        document.preferred_magnitude(event).unwrap().magnitude.value,
        4.8
    );
}

#[test]
fn relink_after_edit() {
    let (mut document, _) = Document::load(CATALOG).unwrap();
    let removed = document.parameters_mut().origins.remove(6);
    assert_eq!(removed.public_id, PREFERRED_ORIGIN);

    // The stale handle points at another origin and is not used.
    let event = document.events()[0].clone();
    assert!(document.preferred_origin(&event).is_none());

    let diagnostics = document.relink().unwrap();
    assert!(diagnostics.count(DiagnosticKind::DanglingReference) > 0);
    assert!(document.preferred_origin(&document.events()[0]).is_none());
    assert!(document.find::<Origin>(PREFERRED_ORIGIN).is_none());
}
