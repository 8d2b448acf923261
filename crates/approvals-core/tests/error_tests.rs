// Rust guideline compliant 2026-10-18

//! Unit tests for error types and messages.

use approvals_core::Error;

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let msg = Error::Io(io_err).to_string();
    assert!(msg.contains("IO error"), "IO error should carry its prefix");
}

#[test]
fn test_json_error_formatting() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json")
        .expect_err("Should fail to parse invalid JSON");
    let msg = Error::Json(json_err).to_string();
    assert!(msg.contains("JSON error"));
}

#[test]
fn test_invalid_priority_formatting() {
    let msg = Error::InvalidPriority("URGENT".to_string()).to_string();
    assert_eq!(
        msg,
        "Invalid priority: \"URGENT\" (expected HIGH, MEDIUM or NORMAL)"
    );
}

#[test]
fn test_not_found_formatting() {
    let msg = Error::NotFound("res-0042".to_string()).to_string();
    assert_eq!(msg, "Reservation not found: res-0042");
}

#[test]
fn test_ambiguous_id_lists_matches() {
    let error = Error::AmbiguousId(
        "res-1".to_string(),
        vec!["res-10".to_string(), "res-11".to_string()],
    );
    let msg = error.to_string();
    assert!(msg.contains("res-10"));
    assert!(msg.contains("res-11"));
}

#[test]
fn test_io_error_converts() {
    fn fails() -> approvals_core::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"))?;
        Ok(())
    }
    assert!(matches!(fails(), Err(Error::Io(_))));
}
