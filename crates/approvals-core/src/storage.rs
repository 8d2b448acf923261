// Rust guideline compliant 2026-10-18

//! Storage module for JSONL file operations.
//!
//! The pending-reservation snapshot is owned by the reservation store and is
//! only read here. Dispatched decisions go to a separate append-only log.

use crate::{Decision, Error, Reservation, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Validates that the path is suitable for storage operations.
fn validate_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Path cannot be empty",
        )));
    }
    Ok(())
}

/// Read-only view of a pending-reservation JSONL snapshot.
#[derive(Debug, Clone)]
pub struct Storage {
    /// Path to the JSONL file.
    path: PathBuf,
}

impl Storage {
    /// Creates a new Storage instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        validate_path(&path)?;
        Ok(Self { path })
    }

    /// Returns a reference to the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all reservations, one JSON record per line.
    ///
    /// Blank lines are ignored. A line that is not valid JSON is skipped
    /// with a warning and loading continues with the next line. A record
    /// that parses but carries an unknown priority or fails validation
    /// fails the whole load; no partial snapshot is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or read
    /// - A record has an unknown priority
    /// - A record fails validation
    pub fn load_all(&self) -> Result<Vec<Reservation>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut reservations = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            if let Some(value) = self.parse_line(index + 1, &line?) {
                reservations.push(Reservation::from_json(value)?);
            }
        }

        tracing::debug!(count = reservations.len(), "loaded pending reservations");
        Ok(reservations)
    }

    /// Loads a single reservation by ID with early termination.
    ///
    /// Malformed lines are skipped with a warning, as in [`Storage::load_all`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the matching record is
    /// invalid, or no record has the ID.
    pub fn load_by_id(&self, id: &str) -> Result<Reservation> {
        if !self.path.exists() {
            return Err(Error::NotFound(id.to_string()));
        }

        let reader = BufReader::new(File::open(&self.path)?);

        for (index, line) in reader.lines().enumerate() {
            if let Some(value) = self.parse_line(index + 1, &line?) {
                if value.get("id").and_then(serde_json::Value::as_str) == Some(id) {
                    return Reservation::from_json(value);
                }
            }
        }

        Err(Error::NotFound(id.to_string()))
    }

    /// Parses one snapshot line, or returns `None` for a blank or malformed one.
    fn parse_line(&self, line_number: usize, line: &str) -> Option<serde_json::Value> {
        if line.trim().is_empty() {
            return None;
        }

        match serde_json::from_str(line) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    line = line_number,
                    error = %e,
                    "skipping malformed JSON line"
                );
                None
            }
        }
    }

    /// Replaces the snapshot with the provided reservations.
    ///
    /// Uses atomic write operations (temp file + rename). This seeds
    /// snapshots; it is never used to modify a record under review.
    ///
    /// # Errors
    ///
    /// Returns an error if any reservation fails validation or the file
    /// cannot be written.
    pub fn save_all(&self, reservations: &[Reservation]) -> Result<()> {
        use std::io::Write;

        for reservation in reservations {
            reservation.validate()?;
        }

        let temp_path = self.path.with_extension("jsonl.tmp");
        {
            let mut file = File::create(&temp_path)?;
            for reservation in reservations {
                let json = serde_json::to_string(reservation)?;
                file.write_all(json.as_bytes())?;
                file.write_all(b"\n")?;
            }
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

/// Append-only JSONL log of dispatched approval decisions.
#[derive(Debug, Clone)]
pub struct DecisionLog {
    path: PathBuf,
}

impl DecisionLog {
    /// Creates a new DecisionLog instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        validate_path(&path)?;
        Ok(Self { path })
    }

    /// Returns a reference to the log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one decision as a single JSON line.
    ///
    /// Holds an exclusive lock on the log file while writing so concurrent
    /// reviewers never interleave partial lines.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lock cannot be acquired
    /// - The file cannot be opened or written
    pub fn append(&self, decision: &Decision) -> Result<()> {
        use fs2::FileExt;
        use std::fs::OpenOptions;
        use std::io::Write;

        let mut line = serde_json::to_string(decision)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = file.write_all(line.as_bytes()).and_then(|()| file.sync_data());
        let _ = file.unlock();
        result?;

        tracing::debug!(
            reservation_id = %decision.reservation_id,
            action = %decision.action,
            "decision appended"
        );
        Ok(())
    }

    /// Loads all recorded decisions in append order.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    pub fn load_all(&self) -> Result<Vec<Decision>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        serde_json::Deserializer::from_reader(reader)
            .into_iter::<Decision>()
            .map(|result| result.map_err(Error::from))
            .collect()
    }
}
