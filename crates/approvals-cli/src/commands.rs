// Rust guideline compliant 2026-10-18

//! Command implementations for the approval queue CLI.

pub mod decide;
pub mod decisions;
pub mod init;
pub mod list;
pub mod show;
