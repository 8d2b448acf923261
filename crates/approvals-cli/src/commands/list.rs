// Rust guideline compliant 2026-10-18

//! Implementation of the `aq list` command.
//!
//! Shows the pending reservations matching the search text and priority
//! filter, highest priority and oldest submission first.

use crate::OutputFormatter;
use anyhow::Result;
use approvals_app::{parse_priority_filter, AppError, QueueQuery, QueueView, WorkspaceContext};
use approvals_core::Config;

/// Builds the queue view for the workspace.
///
/// # Arguments
///
/// * `context` - Workspace to read the pending snapshot from
/// * `config` - Loaded workspace configuration
/// * `search` - Optional search text
/// * `priority` - Optional priority filter text (`high`, `medium`, `normal`, `all`)
/// * `limit` - Optional maximum number of items to keep
///
/// # Errors
///
/// Returns an error if:
/// - The priority filter is not a known tier
/// - The snapshot cannot be read or contains an invalid record
pub fn build_view(
    context: &WorkspaceContext,
    config: &Config,
    search: Option<String>,
    priority: Option<String>,
    limit: Option<usize>,
) -> Result<QueueView> {
    let priority = match priority {
        Some(value) => parse_priority_filter(&value)?,
        None => config.default_priority_filter,
    };

    let storage = context.open_storage()?;
    let pending = storage.load_all().map_err(AppError::from)?;

    let query = QueueQuery::new(search.unwrap_or_default(), priority);
    Ok(QueueView::build(&pending, &query).with_limit(limit))
}

/// Prints the filtered approval queue.
///
/// # Errors
///
/// Returns an error if the queue view cannot be built.
pub fn execute(
    context: &WorkspaceContext,
    config: &Config,
    search: Option<String>,
    priority: Option<String>,
    limit: Option<usize>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let view = build_view(context, config, search, priority, limit)?;
    println!("{}", formatter.format_queue(&view));
    Ok(())
}
