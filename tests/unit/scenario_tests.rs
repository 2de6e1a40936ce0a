//! End-to-end classification through decode and filter, without a process.

use chrono::{DateTime, TimeZone, Utc};

use janitor::JanitorError;
use janitor::cf::decode;
use janitor::staleness::{StaleApp, compile, filter, resolve};
use janitor::test_utils::fixtures::apps_page;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

fn injected_now() -> DateTime<Utc> {
    at(2024, 1, 1, 0, 0, 0)
}

fn basic_records() -> Vec<janitor::staleness::ApplicationRecord> {
    let raw = apps_page(
        &[
            ("api", Some("2023-01-01T00:00:00Z")),
            ("web", Some("2023-06-01T00:00:00Z")),
        ],
        None,
    );
    decode(raw.as_bytes()).unwrap().records
}

#[test]
fn scenario_stale_before_cutoff() {
    let cutoff = resolve("2023-03-01T00:00:00Z", injected_now()).unwrap();
    let outcome = filter(&basic_records(), cutoff, None);
    assert_eq!(
        outcome.stale,
        vec![StaleApp {
            name: "api".to_string(),
            last_update: at(2023, 1, 1, 0, 0, 0),
        }]
    );
}

#[test]
fn scenario_exclusion_hides_stale_app() {
    let cutoff = resolve("2023-03-01T00:00:00Z", injected_now()).unwrap();
    let exclusion = compile("^api$").unwrap();
    let outcome = filter(&basic_records(), cutoff, exclusion.as_ref());
    assert!(outcome.stale.is_empty());
}

#[test]
fn scenario_now_is_strict() {
    let raw = apps_page(
        &[
            ("almost", Some("2023-12-31T23:59:59Z")),
            ("exact", Some("2024-01-01T00:00:00Z")),
        ],
        None,
    );
    let records = decode(raw.as_bytes()).unwrap().records;
    let cutoff = resolve("now", injected_now()).unwrap();
    let outcome = filter(&records, cutoff, None);
    let names: Vec<_> = outcome.stale.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["almost"]);
}

#[test]
fn scenario_empty_page() {
    let records = decode(apps_page(&[], None).as_bytes()).unwrap().records;
    let outcome = filter(&records, injected_now(), None);
    assert!(outcome.is_empty());
}

#[test]
fn scenario_absent_timestamp_is_diagnosed() {
    let raw = apps_page(
        &[
            ("ghost", None),
            ("stale", Some("2023-01-01T00:00:00Z")),
            ("fresh", Some("2023-12-01T00:00:00Z")),
        ],
        None,
    );
    let records = decode(raw.as_bytes()).unwrap().records;
    let outcome = filter(&records, at(2023, 6, 1, 0, 0, 0), None);
    assert_eq!(outcome.stale.len(), 1);
    assert_eq!(outcome.stale[0].name, "stale");
    assert_eq!(outcome.malformed.len(), 1);
    assert_eq!(outcome.malformed[0].name, "ghost");
    assert_eq!(outcome.malformed[0].guid.as_deref(), Some("guid-0"));
}

#[test]
fn scenario_invalid_cutoff() {
    let err = resolve("not-a-date", injected_now()).unwrap_err();
    assert!(matches!(err, JanitorError::InvalidTimestamp { ref input, .. } if input == "not-a-date"));
}
