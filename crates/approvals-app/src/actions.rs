// Rust guideline compliant 2026-10-18

//! Approval action dispatch.
//!
//! The queue never carries out a decision itself. Each action is handed,
//! keyed only by reservation ID, to an [`ApprovalHandler`] supplied by the
//! caller; the handler's outcome is propagated as-is and never retried.

use crate::error::{AppError, Result};
use crate::ids::resolve_reservation_id;
use crate::time::unix_millis;
use approvals_core::{ApprovalAction, Decision, DecisionLog, Reservation};

/// Receiver of approve / reject / request-changes actions.
pub trait ApprovalHandler {
    /// Carries out `action` on the reservation with `reservation_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the handler cannot carry out the action.
    fn handle(&mut self, action: ApprovalAction, reservation_id: &str) -> Result<()>;
}

impl<F> ApprovalHandler for F
where
    F: FnMut(ApprovalAction, &str) -> Result<()>,
{
    fn handle(&mut self, action: ApprovalAction, reservation_id: &str) -> Result<()> {
        self(action, reservation_id)
    }
}

/// Dispatches an approval action for a reservation in the pending snapshot.
///
/// # Arguments
///
/// * `handler` - Handler that carries out the action
/// * `pending` - Pending snapshot the reviewer is looking at
/// * `action` - Action to take
/// * `id` - Full reservation ID or unique prefix
///
/// # Returns
///
/// The resolved reservation ID.
///
/// # Errors
///
/// Returns an error if the ID does not resolve to exactly one pending
/// reservation or the handler fails.
pub fn dispatch<H>(
    handler: &mut H,
    pending: &[Reservation],
    action: ApprovalAction,
    id: &str,
) -> Result<String>
where
    H: ApprovalHandler + ?Sized,
{
    let reservation_id = resolve_reservation_id(id, pending)?;
    tracing::info!(%action, reservation_id = %reservation_id, "dispatching approval action");

    if let Err(err) = handler.handle(action, &reservation_id) {
        tracing::warn!(%action, reservation_id = %reservation_id, error = %err, "approval handler failed");
        return Err(err);
    }

    Ok(reservation_id)
}

/// Handler that records each action in the append-only decision log.
#[derive(Debug, Clone)]
pub struct DecisionLogHandler {
    log: DecisionLog,
    reviewer: Option<String>,
    note: Option<String>,
}

impl DecisionLogHandler {
    /// Creates a handler writing to `log`.
    #[must_use]
    pub fn new(log: DecisionLog) -> Self {
        Self {
            log,
            reviewer: None,
            note: None,
        }
    }

    /// Sets the reviewer recorded with each decision.
    #[must_use]
    pub fn with_reviewer(mut self, reviewer: Option<String>) -> Self {
        self.reviewer = reviewer;
        self
    }

    /// Sets the note recorded with each decision.
    #[must_use]
    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }
}

impl ApprovalHandler for DecisionLogHandler {
    fn handle(&mut self, action: ApprovalAction, reservation_id: &str) -> Result<()> {
        let decision = Decision {
            reviewer: self.reviewer.clone(),
            note: self.note.clone(),
            ..Decision::new(reservation_id, action, unix_millis())
        };
        self.log
            .append(&decision)
            .map_err(|err| AppError::Handler(err.to_string()))
    }
}
