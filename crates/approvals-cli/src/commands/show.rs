// Rust guideline compliant 2026-10-18

//! Implementation of the `aq show` command.

use crate::OutputFormatter;
use anyhow::Result;
use approvals_app::{resolve_reservation_id, AppError, WorkspaceContext};
use approvals_core::{Error as CoreError, Reservation};

/// Finds one pending reservation by full ID or unique prefix.
///
/// A full ID is looked up with an early-terminating scan; only when it is
/// not found is the whole snapshot loaded to resolve a prefix.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read or the ID does not
/// resolve to exactly one reservation.
pub fn find(context: &WorkspaceContext, id: &str) -> Result<Reservation> {
    let storage = context.open_storage()?;

    match storage.load_by_id(id.trim()) {
        Ok(reservation) => Ok(reservation),
        Err(CoreError::NotFound(_)) => {
            let pending = storage.load_all().map_err(AppError::from)?;
            let full_id = resolve_reservation_id(id, &pending)?;
            pending
                .into_iter()
                .find(|r| r.id == full_id)
                .ok_or_else(|| AppError::from(CoreError::NotFound(full_id)).into())
        }
        Err(err) => Err(AppError::from(err).into()),
    }
}

/// Shows one pending reservation.
///
/// # Arguments
///
/// * `context` - Workspace to read from
/// * `id` - Full reservation ID or unique prefix
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if the reservation cannot be found.
pub fn execute(context: &WorkspaceContext, id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let reservation = find(context, id)?;
    println!("{}", formatter.format_reservation(&reservation));
    Ok(())
}
