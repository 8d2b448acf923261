// Rust guideline compliant 2026-10-18

//! Implementation of `aq approve`, `aq reject` and `aq request-changes`.
//!
//! The action is dispatched to the decision log handler, keyed by the
//! reservation ID. The pending snapshot itself is never modified; the
//! reservation store picks decisions up from the log.

use crate::{terminal, OutputFormatter};
use anyhow::Result;
use approvals_app::{dispatch, AppError, DecisionLogHandler, WorkspaceContext};
use approvals_core::{ApprovalAction, Config, Reservation};

/// Options for a single approval action.
#[derive(Debug, Clone)]
pub struct DecideOptions {
    /// Action to take.
    pub action: ApprovalAction,
    /// Full reservation ID or unique prefix.
    pub id: String,
    /// Reviewer name; falls back to the configured reviewer.
    pub reviewer: Option<String>,
    /// Optional note for the organizer.
    pub note: Option<String>,
}

/// Dispatches the action and returns the affected reservation.
///
/// # Errors
///
/// Returns an error if:
/// - The snapshot cannot be read
/// - The ID does not resolve to exactly one pending reservation
/// - The decision cannot be recorded
pub fn run(
    context: &WorkspaceContext,
    config: &Config,
    options: DecideOptions,
) -> Result<(Reservation, bool)> {
    let pending = context.open_storage()?.load_all().map_err(AppError::from)?;
    let log = context.open_decision_log()?;

    let mut handler = DecisionLogHandler::new(log.clone())
        .with_reviewer(options.reviewer.or_else(|| config.reviewer.clone()))
        .with_note(options.note);

    let previous = log.load_all().map_err(AppError::from)?;
    let reservation_id = dispatch(&mut handler, &pending, options.action, &options.id)?;
    let already_decided = previous.iter().any(|d| d.reservation_id == reservation_id);
    if already_decided {
        tracing::warn!(reservation_id = %reservation_id, "reservation already had a recorded decision");
    }

    let reservation = pending
        .into_iter()
        .find(|r| r.id == reservation_id)
        .ok_or_else(|| AppError::from(approvals_core::Error::NotFound(reservation_id.clone())))?;

    Ok((reservation, already_decided))
}

/// Dispatches the action and prints a confirmation.
///
/// # Errors
///
/// Returns an error if the action cannot be dispatched.
pub fn execute(
    context: &WorkspaceContext,
    config: &Config,
    options: DecideOptions,
    formatter: &dyn OutputFormatter,
    warn_duplicates: bool,
    use_color: bool,
) -> Result<()> {
    let action = options.action;
    let (reservation, already_decided) = run(context, config, options)?;

    if already_decided && warn_duplicates {
        terminal::print_warning(
            &format!("{} already had a recorded decision", reservation.id),
            use_color,
        );
    }
    println!("{}", formatter.format_dispatch(action, &reservation));
    Ok(())
}
