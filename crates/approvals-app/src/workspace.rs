// Rust guideline compliant 2026-10-18

//! Workspace discovery and path management utilities.

use crate::error::{AppError, Result};
use approvals_core::{Config, DecisionLog, Storage};
use std::path::{Path, PathBuf};

/// Name of the workspace directory.
pub const WORKSPACE_DIR: &str = ".approvals";

/// Path metadata for an approval queue workspace.
#[derive(Debug, Clone)]
pub struct WorkspaceContext {
    root: PathBuf,
    approvals_dir: PathBuf,
    pending_path: PathBuf,
    decisions_path: PathBuf,
    config_path: PathBuf,
}

impl WorkspaceContext {
    fn at(root: PathBuf) -> Self {
        let approvals_dir = root.join(WORKSPACE_DIR);
        Self {
            root,
            pending_path: approvals_dir.join("pending.jsonl"),
            decisions_path: approvals_dir.join("decisions.jsonl"),
            config_path: approvals_dir.join("config.toml"),
            approvals_dir,
        }
    }

    /// Discovers a workspace starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `root` - Optional root directory; defaults to the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The `.approvals` directory is missing
    pub fn discover(root: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let context = Self::at(root);
        if !context.approvals_dir.exists() {
            return Err(AppError::NotInitialized {
                path: context.approvals_dir,
            });
        }
        Ok(context)
    }

    /// Creates the workspace layout under `root`, keeping existing files.
    ///
    /// # Returns
    ///
    /// The context and whether anything was created.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or file cannot be created.
    pub fn initialize(root: &Path) -> Result<(Self, bool)> {
        let context = Self::at(root.to_path_buf());
        let mut created = false;

        if !context.approvals_dir.exists() {
            std::fs::create_dir_all(&context.approvals_dir)?;
            created = true;
        }
        for path in [&context.pending_path, &context.decisions_path] {
            if !path.exists() {
                std::fs::File::create(path)?;
                created = true;
            }
        }
        if !context.config_path.exists() {
            Config::default().save(&context.approvals_dir)?;
            created = true;
        }

        tracing::info!(path = %context.approvals_dir.display(), created, "workspace initialized");
        Ok((context, created))
    }

    /// Returns the workspace root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.approvals` directory path.
    #[must_use]
    pub fn approvals_dir(&self) -> &Path {
        self.approvals_dir.as_path()
    }

    /// Returns the pending-reservation snapshot path.
    #[must_use]
    pub fn pending_path(&self) -> &Path {
        self.pending_path.as_path()
    }

    /// Returns the decision log path.
    #[must_use]
    pub fn decisions_path(&self) -> &Path {
        self.decisions_path.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Opens the pending snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be initialized.
    pub fn open_storage(&self) -> Result<Storage> {
        Ok(Storage::new(self.pending_path.clone())?)
    }

    /// Opens the decision log.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be initialized.
    pub fn open_decision_log(&self) -> Result<DecisionLog> {
        Ok(DecisionLog::new(self.decisions_path.clone())?)
    }

    /// Loads workspace configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.approvals_dir())?)
    }
}
