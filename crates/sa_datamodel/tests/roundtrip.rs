mod common;

use sa_archive::SchemaVersion;
use sa_archive::archive::WriteOptions;
use sa_datamodel::{Comment, Document, EventParameters};

use common::{CATALOG, parameters, pick, sample};

#[test]
fn sample_round_trip() {
    let (mut document, diagnostics) = Document::from_parameters(sample()).unwrap();
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);

    let bytes = document.dump().unwrap();
    let (reloaded, diagnostics) = Document::load(&bytes).unwrap();
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
    assert_eq!(reloaded.parameters(), &sample());
}

#[test]
fn catalog_round_trip() {
    let (mut document, _) = Document::load(CATALOG).unwrap();
    let bytes = document.dump().unwrap();
    let (reloaded, diagnostics) = Document::load(&bytes).unwrap();

    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
    assert_eq!(reloaded.parameters(), document.parameters());
    assert_eq!(reloaded.index().len(), document.index().len());
}

#[test]
fn control_characters_round_trip() {
    let mut catalog = EventParameters::new();
    let mut first = pick("Pick/1\t2021", "UG\nM");
    first.waveform_id.channel_code = Some("BH\rZ".to_string());
    first.comments.push(Comment::new("felt\r\nstrongly"));
    catalog.picks.push(first);

    let (mut document, _) = Document::from_parameters(catalog.clone()).unwrap();
    let text = String::from_utf8(document.dump().unwrap()).unwrap();
    assert!(text.contains(r#"<pick publicID="Pick/1&#9;2021">"#));
    assert!(text.contains(r#"stationCode="UG&#10;M""#));

    let (reloaded, diagnostics) = Document::load(text.as_bytes()).unwrap();
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
    assert_eq!(reloaded.parameters(), &catalog);
    assert_eq!(reloaded.picks()[0].waveform_id.station_code, "UG\nM");
}

#[test]
fn dump_is_idempotent() {
    let (mut document, _) = Document::load(CATALOG).unwrap();
    let first = document.dump().unwrap();

    let (mut reloaded, _) = Document::load(&first).unwrap();
    let second = reloaded.dump().unwrap();
    assert!(first == second, "dump(load(dump(G))) differs from dump(G)");
}

#[test]
fn written_layout() {
    let (mut document, _) = Document::from_parameters(sample()).unwrap();
    let text = String::from_utf8(document.dump().unwrap()).unwrap();

    assert!(text.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(text.contains(
        r#"<seiscomp xmlns="http://geofon.gfz-potsdam.de/ns/seiscomp3-schema/0.11" version="0.11">"#
    ));
    assert!(text.contains(
        r#"<waveformID networkCode="GE" stationCode="UGM" locationCode="" channelCode="BHZ"/>"#
    ));
    assert!(text.contains("<value>2021-04-30T09:49:23.406014Z</value>"));
    assert!(text.contains("<value>1.25e-7</value>"));
    assert!(text.contains("<value>1.95e16</value>"));
    assert!(text.contains("<originReference>Origin/1</originReference>"));
    assert!(text.contains(r#"<nodalPlanes preferredPlane="2">"#));
    assert!(text.contains("<dataTimeWindow>-10 60.5 0.025</dataTimeWindow>"));
    assert!(text.contains("<timeFixed>false</timeFixed>"));

    // Optional values that are unset are left out.
    assert!(!text.contains("<polarity>"));
}

#[test]
fn older_version_omits_newer_fields() {
    let (mut document, _) = Document::from_parameters(sample()).unwrap();
    let options = WriteOptions::new().with_version(SchemaVersion::new(0, 6));
    let text = String::from_utf8(document.dump_with(options).unwrap()).unwrap();

    assert!(text.contains(r#"version="0.6""#));
    assert!(!text.contains("<unit>"));
    assert!(!text.contains("<passedQC>"));

    let (reloaded, diagnostics) = Document::load(text.as_bytes()).unwrap();
    assert!(diagnostics.is_empty());
    assert_eq!(reloaded.version(), SchemaVersion::new(0, 6));
    assert_eq!(reloaded.amplitudes()[0].unit, None);
    assert_eq!(reloaded.origins()[0].station_magnitudes[0].passed_qc, None);
}

#[test]
fn readings_and_composite_times() {
    let body = r#"
    <pick publicID="Pick/1">
      <time><value>2021-04-30T09:49:40.137053Z</value></time>
      <waveformID networkCode="GE" stationCode="UGM"/>
    </pick>
    <amplitude publicID="Amplitude/1"><type>mb</type></amplitude>
    <reading publicID="Reading/1">
      <pickReference>Pick/1</pickReference>
      <amplitudeReference>Amplitude/1</amplitudeReference>
    </reading>
    <origin publicID="Origin/1">
      <time><value>1906-04-18T13:12:00Z</value></time>
      <latitude><value>37.75</value></latitude>
      <longitude><value>-122.55</value></longitude>
      <compositeTime>
        <year><value>1906</value></year>
        <month><value>4</value></month>
        <second><value>21</value><uncertainty>5</uncertainty></second>
      </compositeTime>
    </origin>"#;
    let (mut document, diagnostics) = Document::load(parameters("0.11", body).as_bytes()).unwrap();
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);

    let reading = &document.readings()[0];
    let ids: Vec<_> = reading.pick_references.iter().map(|r| r.pick_id.id()).collect();
    assert_eq!(ids, ["Pick/1"]);
    assert_eq!(
        document.reading_picks(reading).next().flatten().map(|p| p.public_id.as_str()),
        Some("Pick/1")
    );
    assert!(document.reading_amplitudes(reading).all(|a| a.is_some()));

    let composite = &document.origins()[0].composite_times[0];
    assert_eq!(composite.year.as_ref().map(|q| q.value), Some(1906));
    assert_eq!(composite.day, None);
    assert_eq!(
        composite.second.as_ref().and_then(|q| q.uncertainty),
        Some(5.0)
    );

    let text = String::from_utf8(document.dump().unwrap()).unwrap();
    let amplitude = text.find("<amplitude ").unwrap();
    let reading = text.find(r#"<reading publicID="Reading/1">"#).unwrap();
    let origin = text.find("<origin ").unwrap();
    assert!(amplitude < reading && reading < origin);
    assert!(text.contains("<pickReference>Pick/1</pickReference>"));
    assert!(text.contains("<amplitudeReference>Amplitude/1</amplitudeReference>"));
    assert!(text.contains("<compositeTime>"));

    let (reloaded, _) = Document::load(text.as_bytes()).unwrap();
    assert_eq!(reloaded.parameters(), document.parameters());
}
