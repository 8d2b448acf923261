// Rust guideline compliant 2026-10-18

//! Implementation of the `aq decisions` command.

use crate::OutputFormatter;
use anyhow::Result;
use approvals_app::{AppError, WorkspaceContext};

/// Prints recorded decisions, optionally only those for one reservation.
///
/// # Errors
///
/// Returns an error if the decision log cannot be read.
pub fn execute(
    context: &WorkspaceContext,
    reservation_id: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let mut decisions = context
        .open_decision_log()?
        .load_all()
        .map_err(AppError::from)?;

    if let Some(id) = reservation_id {
        decisions.retain(|d| d.reservation_id == id);
    }

    println!("{}", formatter.format_decisions(&decisions));
    Ok(())
}
