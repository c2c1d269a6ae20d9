//! End-to-end board scenarios: raw state in, display rows out.

use std::collections::HashMap;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;

use crate::board::{BoardEngine, ColorCategory, PLACEHOLDER};
use crate::config::CardConfig;
use crate::state::{EntityState, RawEntityState, convert_entity_state};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 13, 0, 0).unwrap()
}

fn at(mins: i64) -> String {
    (now() + Duration::minutes(mins)).to_rfc3339()
}

fn metro(destination: &str, line: &str, mins: i64) -> serde_json::Value {
    json!({
        "destination": destination,
        "direction_code": 1,
        "line": {
            "id": line.parse::<i64>().unwrap(),
            "designation": line,
            "transport_mode": "METRO",
            "group_of_lines": "Tunnelbanan"
        },
        "stop_point": { "name": "T-Centralen", "designation": "3" },
        "scheduled": at(mins),
        "expected": at(mins)
    })
}

fn states(last_updated: &str, departures: Vec<serde_json::Value>) -> HashMap<String, EntityState> {
    let raw: RawEntityState = serde_json::from_value(json!({
        "last_updated": last_updated,
        "last_changed": last_updated,
        "attributes": {
            "friendly_name": "T-Centralen",
            "departures": departures
        }
    }))
    .unwrap();

    let mut map = HashMap::new();
    map.insert(
        "sensor.t_centralen".to_string(),
        convert_entity_state("sensor.t_centralen", &raw).unwrap(),
    );
    map
}

fn card(json: serde_json::Value) -> CardConfig {
    let mut value = json;
    value["entities"] = json!(["sensor.t_centralen"]);
    value["language"] = json!("en-GB");
    serde_json::from_value(value).unwrap()
}

fn two_departures() -> Vec<serde_json::Value> {
    vec![metro("A", "10", 5), metro("B", "14", -2)]
}

#[test]
fn departed_row_is_dropped() {
    let states = states(&now().to_rfc3339(), two_departures());
    let card = card(json!({
        "hide_departed": true,
        "show_departed_offset": 0,
        "adjust_departure_time": false,
        "show_time_always": false
    }));

    let view = BoardEngine::new().assemble(&card, &states, None, now());
    let rows = &view.entities[0].rows;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].destination, "A");
    assert_eq!(rows[0].label, "5 min");
    assert_eq!(rows[0].color, ColorCategory::MetroBlue);
}

#[test]
fn offset_keeps_departed_row() {
    let states = states(&now().to_rfc3339(), two_departures());
    let card = card(json!({
        "hide_departed": true,
        "show_departed_offset": 5,
        "adjust_departure_time": false,
        "show_time_always": false
    }));

    let view = BoardEngine::new().assemble(&card, &states, None, now());
    let rows = &view.entities[0].rows;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].destination, "A");
    assert_eq!(rows[1].destination, "B");
    assert_eq!(rows[1].label, "Departed");
    assert_eq!(rows[1].color, ColorCategory::MetroRed);
}

#[test]
fn never_updated_shows_placeholder() {
    let states = states("1970-01-01T00:00:00+00:00", two_departures());
    let card = card(json!({
        "hide_departed": false,
        "adjust_departure_time": true,
        "show_time_always": false
    }));

    let view = BoardEngine::new().assemble(&card, &states, None, now());
    let rows = &view.entities[0].rows;

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.label == PLACEHOLDER));
}

#[test]
fn cap_takes_first_three_in_order() {
    let departures: Vec<_> = (1..=10)
        .map(|i| metro(&format!("D{i}"), "17", i))
        .collect();
    let states = states(&now().to_rfc3339(), departures);
    let card = card(json!({ "max_departures": 3 }));

    let view = BoardEngine::new().assemble(&card, &states, None, now());
    let names: Vec<_> = view.entities[0]
        .rows
        .iter()
        .map(|r| r.destination.as_str())
        .collect();

    assert_eq!(names, ["D1", "D2", "D3"]);
    assert!(
        view.entities[0]
            .rows
            .iter()
            .all(|r| r.color == ColorCategory::MetroGreen)
    );
}

#[test]
fn cap_counts_only_visible_rows() {
    let mut departures = vec![metro("gone 1", "13", -20), metro("gone 2", "13", -15)];
    departures.extend((1..=4).map(|i| metro(&format!("D{i}"), "13", i)));
    let states = states(&now().to_rfc3339(), departures);
    let card = card(json!({
        "hide_departed": true,
        "show_departed_offset": 0,
        "max_departures": 2
    }));

    let view = BoardEngine::new().assemble(&card, &states, None, now());
    let names: Vec<_> = view.entities[0]
        .rows
        .iter()
        .map(|r| r.destination.as_str())
        .collect();

    assert_eq!(names, ["D1", "D2"]);
}

#[test]
fn clock_time_mode() {
    let states = states(&now().to_rfc3339(), two_departures());
    let card = card(json!({
        "hide_departed": false,
        "show_time_always": true
    }));

    let view = BoardEngine::new().assemble(&card, &states, None, now());
    let rows = &view.entities[0].rows;

    // Times were published in UTC, so the wall clock reads UTC
    assert_eq!(rows[0].label, "13:05");
    assert_eq!(rows[1].label, "12:58");
}

#[test]
fn filter_and_label_agree_on_now() {
    // A row that survives filtering with offset 0 is never labelled departed
    let departures: Vec<_> = (-5..=5).map(|i| metro(&format!("D{i}"), "11", i)).collect();
    let states = states(&now().to_rfc3339(), departures);
    let card = card(json!({ "hide_departed": true, "show_departed_offset": 0 }));

    let view = BoardEngine::new().assemble(&card, &states, None, now());
    assert!(!view.entities[0].rows.is_empty());
    assert!(view.entities[0].rows.iter().all(|r| r.label != "Departed"));
}

#[test]
fn extreme_departed_offsets_do_not_panic() {
    let states = states(&now().to_rfc3339(), two_departures());

    let card_max = card(json!({ "hide_departed": true, "show_departed_offset": i64::MAX }));
    let view = BoardEngine::new().assemble(&card_max, &states, None, now());
    assert_eq!(view.entities[0].rows.len(), 2);

    let card_min = card(json!({ "hide_departed": true, "show_departed_offset": i64::MIN }));
    let view = BoardEngine::new().assemble(&card_min, &states, None, now());
    assert!(view.entities[0].rows.is_empty());
}
