// Rust guideline compliant 2026-10-18

//! Approval Queue Core Library
//!
//! This crate provides the foundational components for the approval queue:
//! - Data models (Reservation, Organizer, Facility, Priority)
//! - Storage engine (read-only JSONL snapshots, append-only decision log)
//! - Configuration loading
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use models::{ApprovalAction, Decision, Facility, Organizer, Priority, Reservation};
pub use storage::{DecisionLog, Storage};
