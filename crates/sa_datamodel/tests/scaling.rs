mod common;

use core::fmt::Write;
use core::time::Duration;
use std::time::Instant;

use sa_datamodel::Document;

use common::parameters;

const PICKS: usize = 40_000;

fn large_catalog(count: usize) -> String {
    let mut body = String::new();
    for i in 0..count {
        write!(
            body,
            concat!(
                r#"<pick publicID="Pick/{i}"><time><value>2021-04-30T09:49:40Z</value></time>"#,
                r#"<waveformID networkCode="GE" stationCode="S{i}"/></pick>"#,
            ),
            i = i,
        )
        .unwrap();
    }
    body.push_str(r#"<origin publicID="Origin/1">"#);
    body.push_str("<time><value>2021-04-30T09:49:23Z</value></time>");
    body.push_str("<latitude><value>-7.9</value></latitude>");
    body.push_str("<longitude><value>110.4</value></longitude>");
    for i in 0..count {
        write!(
            body,
            "<arrival><pickID>Pick/{i}</pickID><phase>P</phase></arrival>"
        )
        .unwrap();
    }
    body.push_str("</origin>");
    parameters("0.11", &body)
}

#[test]
fn long_lists_load_in_linear_time() {
    let xml = large_catalog(PICKS);
    sa_datamodel::init();

    let started = Instant::now();
    let (document, diagnostics) = Document::load(xml.as_bytes()).unwrap();
    let elapsed = started.elapsed();

    assert!(diagnostics.is_empty(), "{:?}", diagnostics.iter().next());
    assert_eq!(document.picks().len(), PICKS);
    assert_eq!(document.index().len(), PICKS + 1);

    let origin = &document.origins()[0];
    assert_eq!(origin.arrivals.len(), PICKS);
    let last = document.arrival_pick(&origin.arrivals[PICKS - 1]).unwrap();
    assert_eq!(last.waveform_id.station_code, format!("S{}", PICKS - 1));

    // Rescanning siblings for every list element takes minutes at this size.
    assert!(
        elapsed < Duration::from_secs(30),
        "loading {PICKS} picks took {elapsed:?}"
    );
}
