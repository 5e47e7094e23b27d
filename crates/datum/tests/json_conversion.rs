//! serde support on DateTime

use datum::prelude::*;
use serde_json::json;

fn zone() -> Zone {
    "+01:00".parse().unwrap()
}

#[test]
fn test_serializes_as_iso_string() {
    let date = DateTime::new_in(zone(), [1993.0, 2.0, 20.0]);
    let value = serde_json::to_value(date).unwrap();
    assert_eq!(value, json!("1993-03-19T23:00:00.000Z"));
}

#[test]
fn test_invalid_serializes_as_null() {
    let date = DateTime::new_in(zone(), f64::NAN);
    assert_eq!(serde_json::to_string(&date).unwrap(), "null");
}

#[test]
fn test_deserializes_from_string() {
    let date: DateTime = serde_json::from_str("\"1993-03-19T23:00:00.000Z\"").unwrap();
    assert_eq!(date.value_of(), 732_582_000_000.0);

    let date: DateTime = serde_json::from_value(json!("1993-03-20")).unwrap();
    assert_eq!(date.utc_date(), 20.0);
    assert_eq!(date.utc_hours(), 0.0);
}

#[test]
fn test_deserializes_null_and_garbage_as_invalid() {
    let date: DateTime = serde_json::from_str("null").unwrap();
    assert!(!date.is_valid());

    let date: DateTime = serde_json::from_str("\"yesterday-ish\"").unwrap();
    assert!(!date.is_valid());

    assert!(serde_json::from_str::<DateTime>("42").is_err());
}

#[test]
fn test_round_trips_inside_a_document() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Event {
        name: String,
        at: DateTime,
    }

    let event = Event {
        name: "launch".into(),
        at: DateTime::new_in(zone(), [2024.0, 0.0, 15.0, 9.0, 30.0]),
    };
    let text = serde_json::to_string(&event).unwrap();
    assert_eq!(text, r#"{"name":"launch","at":"2024-01-15T08:30:00.000Z"}"#);

    let back: Event = serde_json::from_str(&text).unwrap();
    assert_eq!(back.name, "launch");
    assert_eq!(back.at, event.at);
}
