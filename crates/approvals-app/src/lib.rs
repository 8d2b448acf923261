// Rust guideline compliant 2026-10-18

//! Shared application services for the approval queue.
//!
//! This crate provides reusable, non-CLI-specific helpers for selecting the
//! reviewable queue, dispatching approval actions, resolving reservation
//! IDs, locating the workspace, and standardized response envelopes.

pub mod actions;
pub mod error;
pub mod ids;
pub mod queue;
pub mod response;
pub mod time;
pub mod workspace;

pub use actions::{dispatch, ApprovalHandler, DecisionLogHandler};
pub use error::{AppError, ErrorCode, Result};
pub use ids::resolve_reservation_id;
pub use queue::{parse_priority_filter, select, QueueQuery, QueueState, QueueView};
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use time::{format_submitted, unix_millis};
pub use workspace::WorkspaceContext;
