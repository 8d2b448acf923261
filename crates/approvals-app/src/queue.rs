// Rust guideline compliant 2026-10-18

//! Selection of the reviewable approval queue.
//!
//! [`select`] is a pure function over a snapshot of pending reservations: it
//! keeps the reservations matching the search text and priority filter, then
//! orders them by priority tier (highest first) and submission time (oldest
//! first). The input is never modified.

use crate::error::Result;
use approvals_core::{Priority, Reservation};
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;

/// Snapshots at or above this size are filtered in parallel.
const PARALLEL_THRESHOLD: usize = 1_000;

/// Search text and priority filter for the approval queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueQuery {
    /// Case-insensitive search text; empty matches everything.
    pub text: String,
    /// Priority tier to keep; `None` keeps all tiers.
    pub priority: Option<Priority>,
}

impl QueueQuery {
    /// Creates a new query.
    pub fn new(text: impl Into<String>, priority: Option<Priority>) -> Self {
        Self {
            text: text.into(),
            priority,
        }
    }

    /// Selects and orders the matching reservations.
    #[must_use]
    pub fn select(&self, all: &[Reservation]) -> Vec<Reservation> {
        select(all, &self.text, self.priority)
    }
}

/// Returns the reservations to display, filtered and in review order.
///
/// A reservation is kept when both hold:
/// - `query` is empty, or is a case-insensitive substring of the event title
///   or of the organizer's organization;
/// - `priority_filter` is `None`, or equals the reservation's priority.
///
/// The result is sorted by priority rank descending, then `submitted_at`
/// ascending. The sort is stable: exact ties keep their input order.
///
/// # Arguments
///
/// * `all` - Full pending snapshot
/// * `query` - Search text
/// * `priority_filter` - Optional priority tier
///
/// # Returns
///
/// A new vector; `all` is left untouched.
#[must_use]
pub fn select(
    all: &[Reservation],
    query: &str,
    priority_filter: Option<Priority>,
) -> Vec<Reservation> {
    let needle = query.to_lowercase();

    let predicate = |r: &Reservation| {
        if let Some(priority) = priority_filter {
            if r.priority != priority {
                return false;
            }
        }

        needle.is_empty()
            || r.event_title.to_lowercase().contains(&needle)
            || r.organizer.organization.to_lowercase().contains(&needle)
    };

    let mut selected: Vec<Reservation> = if all.len() >= PARALLEL_THRESHOLD {
        all.par_iter().filter(|r| predicate(*r)).cloned().collect()
    } else {
        all.iter().filter(|r| predicate(*r)).cloned().collect()
    };

    selected.sort_by(review_order);
    selected
}

/// Review order: higher rank first, then earlier submission.
fn review_order(a: &Reservation, b: &Reservation) -> Ordering {
    b.priority
        .rank()
        .cmp(&a.priority.rank())
        .then_with(|| a.submitted_at.cmp(&b.submitted_at))
}

/// Parses a priority filter option.
///
/// `all` (any case) or an empty string means no filter.
///
/// # Errors
///
/// Returns an `InvalidPriority` error for any other unknown value.
pub fn parse_priority_filter(value: &str) -> Result<Option<Priority>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    Ok(Some(Priority::parse(trimmed)?))
}

/// What the presentation layer should show for a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueState {
    /// Nothing is pending at all.
    NoPending,
    /// Reservations are pending but none match the current filters.
    AllCaughtUp,
    /// At least one reservation is selected.
    Ready,
}

/// A selection together with the context needed to render it.
#[derive(Debug, Clone, Serialize)]
pub struct QueueView {
    /// Size of the full pending snapshot.
    pub total_pending: usize,
    /// Number of reservations matching the query, before any display limit.
    pub matched: usize,
    /// Display state.
    pub state: QueueState,
    /// Selected reservations in review order.
    pub items: Vec<Reservation>,
}

impl QueueView {
    /// Builds the view for a snapshot and query.
    #[must_use]
    pub fn build(all: &[Reservation], query: &QueueQuery) -> Self {
        let items = query.select(all);
        let state = if all.is_empty() {
            QueueState::NoPending
        } else if items.is_empty() {
            QueueState::AllCaughtUp
        } else {
            QueueState::Ready
        };

        tracing::debug!(
            total = all.len(),
            matched = items.len(),
            ?state,
            "queue selected"
        );

        Self {
            total_pending: all.len(),
            matched: items.len(),
            state,
            items,
        }
    }

    /// Keeps at most `limit` items, head of the queue first.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            self.items.truncate(limit);
        }
        self
    }
}
