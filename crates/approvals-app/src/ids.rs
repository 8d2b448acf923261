// Rust guideline compliant 2026-10-18

//! ID resolution helpers.

use crate::error::Result;
use approvals_core::{Error as CoreError, Reservation};

/// Resolves a full or prefix reservation ID to its canonical ID.
///
/// An exact match wins even when the same text is also a prefix of other
/// IDs.
///
/// # Arguments
///
/// * `partial` - Full ID or unique prefix
/// * `reservations` - Snapshot to match against
///
/// # Errors
///
/// Returns `NotFound` if nothing matches and `AmbiguousId` if the prefix
/// matches more than one reservation.
pub fn resolve_reservation_id(partial: &str, reservations: &[Reservation]) -> Result<String> {
    let partial = partial.trim();
    if partial.is_empty() {
        return Err(CoreError::NotFound(String::new()).into());
    }

    if reservations.iter().any(|r| r.id == partial) {
        return Ok(partial.to_string());
    }

    let mut matches: Vec<&str> = reservations
        .iter()
        .filter(|r| r.id.starts_with(partial))
        .map(|r| r.id.as_str())
        .collect();

    match matches.len() {
        0 => Err(CoreError::NotFound(partial.to_string()).into()),
        1 => Ok(matches[0].to_string()),
        _ => {
            matches.sort_unstable();
            Err(CoreError::AmbiguousId(
                partial.to_string(),
                matches.into_iter().map(str::to_string).collect(),
            )
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;
    use approvals_core::{Organizer, Priority};

    fn snapshot() -> Vec<Reservation> {
        ["res-100", "res-101", "res-200", "res-1"]
            .iter()
            .map(|id| Reservation::new(*id, "Event", Organizer::default(), Priority::Normal, 0))
            .collect()
    }

    #[test]
    fn test_exact_match_wins_over_prefix() {
        assert_eq!(resolve_reservation_id("res-1", &snapshot()).unwrap(), "res-1");
    }

    #[test]
    fn test_unique_prefix() {
        assert_eq!(resolve_reservation_id("res-2", &snapshot()).unwrap(), "res-200");
        assert_eq!(resolve_reservation_id("res-101", &snapshot()).unwrap(), "res-101");
    }

    #[test]
    fn test_ambiguous_prefix() {
        match resolve_reservation_id("res-10", &snapshot()) {
            Err(AppError::Core(CoreError::AmbiguousId(_, matches))) => {
                assert_eq!(matches, vec!["res-100", "res-101"]);
            }
            other => panic!("expected AmbiguousId, got {other:?}"),
        }
    }

    #[test]
    fn test_not_found() {
        assert!(matches!(
            resolve_reservation_id("res-9", &snapshot()),
            Err(AppError::Core(CoreError::NotFound(_)))
        ));
        assert!(resolve_reservation_id("  ", &snapshot()).is_err());
    }
}
