// Rust guideline compliant 2026-10-18

//! Integration tests for snapshot storage and the decision log.

use approvals_core::{ApprovalAction, Decision, DecisionLog, Error, Storage};
use std::fs;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{"id":"res-001","event_title":"Foundation Day","organizer":{"name":"Maria Santos","id_number":"EMP-7","organization":"Office of Student Affairs"},"facility":{"id":"fac-gym","name":"Gymnasium"},"date":"2026-03-01","start_time":"08:00:00","end_time":"17:00:00","expected_attendees":500,"event_type":"UNIVERSITY_EVENT","priority":"HIGH","submitted_at":1767225600000}
{"id":"res-002","event_title":"Org Fair","organizer":{"name":"Ana Reyes","id_number":"2022-0101","organization":"Student Council"},"priority":"normal","submitted_at":1767225500000}
"#;

#[test]
fn test_load_snapshot_written_by_store() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("pending.jsonl");
    fs::write(&path, SNAPSHOT).expect("Failed to write snapshot");

    let storage = Storage::new(path).expect("Failed to create storage");
    let reservations = storage.load_all().expect("Failed to load snapshot");

    assert_eq!(reservations.len(), 2);
    assert_eq!(reservations[0].facility.name, "Gymnasium");
    assert_eq!(reservations[1].organizer.organization, "Student Council");
    assert_eq!(reservations[1].expected_attendees, 0);
}

#[test]
fn test_load_does_not_modify_snapshot() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("pending.jsonl");
    fs::write(&path, SNAPSHOT).expect("Failed to write snapshot");

    let storage = Storage::new(path.clone()).expect("Failed to create storage");
    storage.load_all().expect("Failed to load snapshot");
    storage.load_by_id("res-002").expect("Failed to load by id");

    assert_eq!(fs::read_to_string(&path).unwrap(), SNAPSHOT);
}

#[test]
fn test_invalid_priority_is_reported_not_ranked() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("pending.jsonl");
    let snapshot = SNAPSHOT.replace("\"normal\"", "\"whenever\"");
    fs::write(&path, snapshot).expect("Failed to write snapshot");

    let storage = Storage::new(path).expect("Failed to create storage");
    match storage.load_all() {
        Err(Error::InvalidPriority(value)) => assert_eq!(value, "whenever"),
        other => panic!("expected InvalidPriority, got {other:?}"),
    }
}

#[test]
fn test_empty_id_fails_validation() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("pending.jsonl");
    fs::write(&path, SNAPSHOT.replace("res-002", "")).expect("Failed to write snapshot");

    let storage = Storage::new(path).expect("Failed to create storage");
    assert!(matches!(
        storage.load_all(),
        Err(Error::InvalidReservation(_))
    ));
}

#[test]
fn test_decision_log_survives_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("decisions.jsonl");

    {
        let log = DecisionLog::new(path.clone()).expect("Failed to open log");
        log.append(&Decision::new("res-001", ApprovalAction::Reject, 5))
            .expect("Failed to append");
    }

    let log = DecisionLog::new(path.clone()).expect("Failed to reopen log");
    log.append(&Decision::new("res-002", ApprovalAction::Approve, 6))
        .expect("Failed to append");

    let decisions = log.load_all().expect("Failed to load decisions");
    let ids: Vec<&str> = decisions.iter().map(|d| d.reservation_id.as_str()).collect();
    assert_eq!(ids, vec!["res-001", "res-002"]);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains("\"action\":\"reject\""));
}
