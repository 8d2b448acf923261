// Rust guideline compliant 2026-10-18

//! Tests for the output formatters.

use approvals_app::{QueueQuery, QueueView};
use approvals_cli::create_formatter;
use approvals_cli::output::SCHEDULING_NOTE;
use approvals_core::{ApprovalAction, Decision, Organizer, Priority, Reservation};

fn create_test_reservation() -> Reservation {
    let mut reservation = Reservation::new(
        "res-0042",
        "Foundation Day Program",
        Organizer {
            name: "Dana Cruz".to_string(),
            id_number: "2021-0042".to_string(),
            organization: "Office of the President".to_string(),
        },
        Priority::High,
        1_706_745_600_000,
    );
    reservation.event_type = "UNIVERSITY_EVENT".to_string();
    reservation.purpose = Some("Annual celebration".to_string());
    reservation
}

#[test]
fn test_table_queue_header_legend_and_note() {
    let view = QueueView::build(&[create_test_reservation()], &QueueQuery::default());
    let output = create_formatter("table", false, true).format_queue(&view);

    assert!(output.starts_with("Approval Queue\n1 pending approval(s)"));
    assert!(output.contains("res-0042"));
    assert!(output.contains("Foundation Day Program"));
    assert!(output.contains("1. High: University Events"));
    assert!(output.contains("2. Medium: Academic Classes"));
    assert!(output.contains("3. Normal: Student Organization Events"));
    assert!(output.contains(SCHEDULING_NOTE));
}

#[test]
fn test_table_legend_can_be_hidden() {
    let view = QueueView::build(&[create_test_reservation()], &QueueQuery::default());
    let output = create_formatter("table", false, false).format_queue(&view);

    assert!(!output.contains("Priority Order"));
    assert!(!output.contains(SCHEDULING_NOTE));
}

#[test]
fn test_table_empty_states() {
    let view = QueueView::build(&[], &QueueQuery::default());
    let output = create_formatter("table", false, true).format_queue(&view);
    assert!(output.contains("0 pending approval(s)"));
    assert!(output.contains("No pending approvals."));
    assert!(!output.contains(SCHEDULING_NOTE));

    let view = QueueView::build(
        &[create_test_reservation()],
        &QueueQuery::new("nothing like it", None),
    );
    let output = create_formatter("table", false, true).format_queue(&view);
    assert!(output.contains("1 pending approval(s)"));
    assert!(output.contains("All caught up! No pending approvals"));
}

#[test]
fn test_table_reservation_details() {
    let output = create_formatter("table", false, true).format_reservation(&create_test_reservation());

    assert!(output.contains("HIGH Priority (University Events)"));
    assert!(output.contains("UNIVERSITY EVENT"));
    assert!(output.contains("Dana Cruz (2021-0042)"));
    assert!(output.contains("Annual celebration"));
}

#[test]
fn test_json_queue_envelope() {
    let view = QueueView::build(&[create_test_reservation()], &QueueQuery::default());
    let output = create_formatter("json", false, true).format_queue(&view);

    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(value["status"], "ok");
    assert_eq!(value["result"]["state"], "ready");
    assert_eq!(value["result"]["total_pending"], 1);
    assert_eq!(value["result"]["items"][0]["priority"], "HIGH");
}

#[test]
fn test_json_dispatch_envelope() {
    let output = create_formatter("json", false, false)
        .format_dispatch(ApprovalAction::RequestChanges, &create_test_reservation());

    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(value["result"]["reservation_id"], "res-0042");
    assert_eq!(value["result"]["action"], "request_changes");
}

#[test]
fn test_json_error_uses_error_envelope() {
    let output = create_formatter("json", false, false).format_error("boom");
    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(value["code"], "unknown");
    assert_eq!(value["message"], "boom");
}

#[test]
fn test_plain_queue_lines() {
    let view = QueueView::build(&[create_test_reservation()], &QueueQuery::default());
    let output = create_formatter("plain", false, true).format_queue(&view);

    assert_eq!(
        output.trim_end(),
        "res-0042\tHIGH\t1706745600000\tFoundation Day Program\tOffice of the President"
    );
}

#[test]
fn test_table_dispatch_and_decisions() {
    let formatter = create_formatter("table", false, false);
    let output = formatter.format_dispatch(ApprovalAction::Approve, &create_test_reservation());
    assert!(output.contains("Approved res-0042"));

    assert_eq!(formatter.format_decisions(&[]), "No decisions recorded.");

    let mut decision = Decision::new("res-0042", ApprovalAction::Reject, 0);
    decision.reviewer = Some("registrar".to_string());
    let output = formatter.format_decisions(&[decision]);
    assert!(output.contains("res-0042"));
    assert!(output.contains("registrar"));
    assert!(output.contains("1970-01-01 00:00 UTC"));
}

#[test]
fn test_plain_error_has_no_color() {
    assert_eq!(create_formatter("plain", true, false).format_error("boom"), "Error: boom");
}
