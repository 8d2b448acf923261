// Rust guideline compliant 2026-10-18

//! Core data models for the approval queue.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Review priority of a reservation.
///
/// The set is closed: there is no unknown or default tier. Ordering follows
/// [`Priority::rank`], so `HIGH > MEDIUM > NORMAL` regardless of the order
/// in which the variants are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Priority {
    /// University events.
    High,
    /// Academic classes.
    Medium,
    /// Student organization events.
    Normal,
}

impl Priority {
    /// All tiers, highest first.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Normal];

    /// Returns the review rank of the tier (HIGH=3, MEDIUM=2, NORMAL=1).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Normal => 1,
        }
    }

    /// Parses a priority name case-insensitively.
    ///
    /// # Arguments
    ///
    /// * `value` - Priority text such as `HIGH`, `medium` or `Normal`
    ///
    /// # Returns
    ///
    /// The parsed priority.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPriority`] for anything outside the
    /// three defined tiers.
    pub fn parse(value: &str) -> crate::Result<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "HIGH" => Ok(Priority::High),
            "MEDIUM" => Ok(Priority::Medium),
            "NORMAL" => Ok(Priority::Normal),
            _ => Err(crate::Error::InvalidPriority(value.to_string())),
        }
    }

    /// Returns the canonical wire name (`HIGH`, `MEDIUM`, `NORMAL`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Normal => "NORMAL",
        }
    }

    /// Returns the display label (`High`, `Medium`, `Normal`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Normal => "Normal",
        }
    }

    /// Returns the kind of event the tier is reserved for.
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Priority::High => "University Events",
            Priority::Medium => "Academic Classes",
            Priority::Normal => "Student Organization Events",
        }
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::parse(s)
    }
}

impl TryFrom<String> for Priority {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Priority::parse(&value)
    }
}

impl From<Priority> for &'static str {
    fn from(priority: Priority) -> Self {
        priority.as_str()
    }
}

/// Person and organization that submitted a reservation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organizer {
    /// Full name of the requester.
    pub name: String,
    /// Student or employee ID number.
    #[serde(default)]
    pub id_number: String,
    /// Organization or department the event is held for.
    #[serde(default)]
    pub organization: String,
}

/// Facility being reserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    /// Facility identifier in the reservation store.
    #[serde(default)]
    pub id: String,
    /// Human-readable facility name.
    pub name: String,
}

/// A facility-booking request awaiting a decision.
///
/// Records are owned by the reservation store; this crate only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Opaque unique identifier.
    pub id: String,
    /// Title of the event.
    pub event_title: String,
    /// Who requested the reservation.
    pub organizer: Organizer,
    /// Facility being requested.
    #[serde(default)]
    pub facility: Facility,
    /// Day of the event.
    #[serde(default)]
    pub date: NaiveDate,
    /// Start of the reserved slot.
    #[serde(default)]
    pub start_time: NaiveTime,
    /// End of the reserved slot.
    #[serde(default)]
    pub end_time: NaiveTime,
    /// Expected number of attendees.
    #[serde(default)]
    pub expected_attendees: u32,
    /// Event type as named by the reservation store (e.g. `UNIVERSITY_EVENT`).
    #[serde(default)]
    pub event_type: String,
    /// Review priority.
    pub priority: Priority,
    /// Submission instant, Unix epoch milliseconds.
    pub submitted_at: i64,
    /// Free-text purpose supplied by the organizer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl Reservation {
    /// Creates a reservation with empty passthrough fields.
    ///
    /// # Arguments
    ///
    /// * `id` - Reservation identifier
    /// * `event_title` - Event title
    /// * `organizer` - Requesting organizer
    /// * `priority` - Review priority
    /// * `submitted_at` - Submission time in epoch milliseconds
    pub fn new(
        id: impl Into<String>,
        event_title: impl Into<String>,
        organizer: Organizer,
        priority: Priority,
        submitted_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            event_title: event_title.into(),
            organizer,
            facility: Facility::default(),
            date: NaiveDate::default(),
            start_time: NaiveTime::default(),
            end_time: NaiveTime::default(),
            expected_attendees: 0,
            event_type: String::new(),
            priority,
            submitted_at,
            purpose: None,
        }
    }

    /// Parses a reservation from a JSON value.
    ///
    /// The priority is checked before the rest of the record so that an
    /// unknown tier is reported as [`crate::Error::InvalidPriority`] instead
    /// of a generic JSON error.
    ///
    /// # Errors
    ///
    /// Returns an error if the priority is unknown, the record does not match
    /// the schema, or validation fails.
    pub fn from_json(value: serde_json::Value) -> crate::Result<Self> {
        match value.get("priority") {
            Some(serde_json::Value::String(raw)) => {
                Priority::parse(raw)?;
            }
            Some(other) => return Err(crate::Error::InvalidPriority(other.to_string())),
            None => {}
        }

        let reservation: Reservation = serde_json::from_value(value)?;
        reservation.validate()?;
        Ok(reservation)
    }

    /// Validates the reservation data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - ID is empty
    /// - Event title is empty
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.trim().is_empty() {
            return Err(crate::Error::InvalidReservation(
                "ID cannot be empty".to_string(),
            ));
        }

        if self.event_title.trim().is_empty() {
            return Err(crate::Error::InvalidReservation(format!(
                "Event title cannot be empty ({})",
                self.id
            )));
        }

        Ok(())
    }

    /// Returns the event type with underscores replaced by spaces.
    #[must_use]
    pub fn event_type_label(&self) -> String {
        self.event_type.replace('_', " ")
    }
}

/// Reviewer decision on a pending reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalAction {
    /// Accept the reservation as submitted.
    Approve,
    /// Decline the reservation.
    Reject,
    /// Send the reservation back to the organizer for edits.
    RequestChanges,
}

impl ApprovalAction {
    /// Returns the snake_case name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ApprovalAction::Approve => "approve",
            ApprovalAction::Reject => "reject",
            ApprovalAction::RequestChanges => "request_changes",
        }
    }

    /// Returns the past-tense verb used in confirmations.
    #[must_use]
    pub const fn past_tense(self) -> &'static str {
        match self {
            ApprovalAction::Approve => "Approved",
            ApprovalAction::Reject => "Rejected",
            ApprovalAction::RequestChanges => "Requested changes for",
        }
    }
}

impl fmt::Display for ApprovalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApprovalAction {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "approve" => Ok(ApprovalAction::Approve),
            "reject" => Ok(ApprovalAction::Reject),
            "request_changes" | "request-changes" => Ok(ApprovalAction::RequestChanges),
            _ => Err(crate::Error::InvalidAction(s.to_string())),
        }
    }
}

/// A dispatched approval action, as recorded in the decision log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Reservation the action applies to.
    pub reservation_id: String,
    /// Action taken.
    pub action: ApprovalAction,
    /// Decision instant, Unix epoch milliseconds.
    pub decided_at: i64,
    /// Reviewer who took the action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
    /// Optional note for the organizer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Decision {
    /// Creates a decision without reviewer or note.
    pub fn new(reservation_id: impl Into<String>, action: ApprovalAction, decided_at: i64) -> Self {
        Self {
            reservation_id: reservation_id.into(),
            action,
            decided_at,
            reviewer: None,
            note: None,
        }
    }
}
