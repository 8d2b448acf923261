// Rust guideline compliant 2026-10-18

//! Implementation of the `aq init` command.
//!
//! Creates the `.approvals` directory with an empty pending snapshot, an
//! empty decision log and a default configuration.

use crate::terminal;
use anyhow::Result;
use approvals_app::WorkspaceContext;
use std::path::Path;

/// Initializes a workspace under `root`.
///
/// Existing files are left untouched, so running it twice is harmless.
///
/// # Errors
///
/// Returns an error if a directory or file cannot be created.
pub fn execute(root: &Path, use_color: bool) -> Result<()> {
    let (context, created) = WorkspaceContext::initialize(root)?;

    if created {
        terminal::print_success(
            &format!(
                "Approval queue initialized at {}",
                context.approvals_dir().display()
            ),
            use_color,
        );
        println!("  - {}", context.pending_path().display());
        println!("  - {}", context.decisions_path().display());
        println!("  - {}", context.config_path().display());
    } else {
        println!(
            "Approval queue already initialized at {}",
            context.approvals_dir().display()
        );
    }

    Ok(())
}
