use super::*;
use chrono::TimeZone;
use serde_json::json;

#[test]
fn test_explicit_fields_preserved() {
    let time = Utc.with_ymd_and_hms(2024, 2, 11, 13, 0, 0).unwrap();
    let event = CloudEvent::builder()
        .id("01933e4b-8e6f-7890-abcd-ef1234567890")
        .source("notify-api")
        .subject("registration")
        .event_type("bc.registry.notification")
        .time(time)
        .data(json!({"notificationId": "29590"}))
        .build();

    assert_eq!(event.id, "01933e4b-8e6f-7890-abcd-ef1234567890");
    assert_eq!(event.source, "notify-api");
    assert_eq!(event.subject, "registration");
    assert_eq!(event.event_type, "bc.registry.notification");
    assert_eq!(event.time, time);
    assert_eq!(event.data, json!({"notificationId": "29590"}));
}

#[test]
fn test_omitted_id_generates_uuid() {
    let event = CloudEvent::builder().build();

    assert!(!event.id.is_empty());
    assert_eq!(event.id.len(), 36); // UUID format
}

#[test]
fn test_generated_ids_differ_across_builds() {
    let first = CloudEvent::builder().build();
    let second = CloudEvent::builder().build();

    assert_ne!(first.id, second.id);
}

#[test]
fn test_empty_id_treated_as_omitted() {
    let event = CloudEvent::builder().id("").build();

    assert!(!event.id.is_empty());
    assert_eq!(event.id.len(), 36);
}

#[test]
fn test_source_and_type_defaults() {
    let event = CloudEvent::builder().build();

    assert_eq!(event.source, DEFAULT_SOURCE);
    assert_eq!(event.event_type, DEFAULT_TYPE);
}

#[test]
fn test_empty_source_and_type_fall_back() {
    let event = CloudEvent::builder().source("").event_type("").build();

    assert_eq!(event.source, DEFAULT_SOURCE);
    assert_eq!(event.event_type, DEFAULT_TYPE);
}

#[test]
fn test_subject_defaults_empty() {
    let event = CloudEvent::builder().build();

    assert_eq!(event.subject, "");
}

#[test]
fn test_data_defaults_to_empty_object() {
    let event = CloudEvent::builder().build();

    assert_eq!(event.data, json!({}));
}

#[test]
fn test_time_defaults_to_construction_instant() {
    let before = Utc::now();
    let event = CloudEvent::builder().build();
    let after = Utc::now();

    assert!(event.time >= before);
    assert!(event.time <= after);
}

#[test]
fn test_default_data_not_shared_between_events() {
    // Each build produces its own empty object, never an aliased default.
    let mut first = CloudEvent::builder().build();
    let second = CloudEvent::builder().build();

    first.data["injected"] = json!(true);
    assert_eq!(second.data, json!({}));
}
