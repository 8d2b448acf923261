// Rust guideline compliant 2026-10-18

//! Output formatting module for the approval queue CLI.
//!
//! This module renders queue views, reservations and decisions in the
//! supported output formats (JSON, table, plain text).

use approvals_app::{format_submitted, ErrorEnvelope, QueueState, QueueView, SuccessEnvelope};
use approvals_core::{ApprovalAction, Decision, Priority, Reservation};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Shown under the queue whenever anything is pending.
pub const SCHEDULING_NOTE: &str = "Note: Please manually check the calendar for scheduling conflicts \
before approving. If a conflict exists, reject the request and the system will suggest \
alternative dates to the requestor.";

/// Output formatter trait.
///
/// Defines the interface for rendering command results in different formats.
pub trait OutputFormatter {
    /// Formats the approval queue.
    fn format_queue(&self, view: &QueueView) -> String;

    /// Formats a single reservation for display.
    fn format_reservation(&self, reservation: &Reservation) -> String;

    /// Formats the confirmation for a dispatched action.
    fn format_dispatch(&self, action: ApprovalAction, reservation: &Reservation) -> String;

    /// Formats the decision log.
    fn format_decisions(&self, decisions: &[Decision]) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

fn schedule(reservation: &Reservation) -> String {
    format!(
        "{} {}-{}",
        reservation.date,
        reservation.start_time.format("%H:%M"),
        reservation.end_time.format("%H:%M")
    )
}

fn decided_at(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| millis.to_string())
}

fn empty_message(state: QueueState) -> Option<&'static str> {
    match state {
        QueueState::NoPending => Some("No pending approvals."),
        QueueState::AllCaughtUp => {
            Some("All caught up! No pending approvals match the current filters.")
        }
        QueueState::Ready => None,
    }
}

/// JSON output formatter.
///
/// Wraps results in the standard success envelope for machine consumption.
pub struct JsonFormatter;

impl JsonFormatter {
    fn envelope<T: serde::Serialize>(result: T) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(result))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize result" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_queue(&self, view: &QueueView) -> String {
        Self::envelope(view)
    }

    fn format_reservation(&self, reservation: &Reservation) -> String {
        Self::envelope(reservation)
    }

    fn format_dispatch(&self, action: ApprovalAction, reservation: &Reservation) -> String {
        Self::envelope(json!({
            "reservation_id": reservation.id,
            "action": action,
        }))
    }

    fn format_decisions(&self, decisions: &[Decision]) -> String {
        Self::envelope(json!({
            "decisions": decisions,
            "total": decisions.len(),
        }))
    }

    fn format_error(&self, error: &str) -> String {
        serde_json::to_string(&ErrorEnvelope::unknown(error))
            .unwrap_or_else(|_| json!({ "error": error }).to_string())
    }
}

/// Table output formatter.
///
/// Renders human-readable tables, with the priority legend and the
/// scheduling note under a non-empty queue.
pub struct TableFormatter {
    use_color: bool,
    show_legend: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    /// * `show_legend` - Whether to print the priority legend and note
    pub fn new(use_color: bool, show_legend: bool) -> Self {
        Self {
            use_color,
            show_legend,
        }
    }

    fn legend() -> String {
        let mut output = String::from("Priority Order\n");
        for (i, priority) in Priority::ALL.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {}: {}\n",
                i + 1,
                priority.label(),
                priority.category()
            ));
        }
        output
    }
}

impl OutputFormatter for TableFormatter {
    fn format_queue(&self, view: &QueueView) -> String {
        let mut output = format!(
            "Approval Queue\n{} pending approval(s)\n\n",
            view.total_pending
        );

        if let Some(message) = empty_message(view.state) {
            output.push_str(message);
            output.push('\n');
        } else {
            let now = Utc::now();
            let mut builder = Builder::default();
            builder.push_record(vec![
                "ID",
                "Priority",
                "Event",
                "Organization",
                "Facility",
                "Schedule",
                "Submitted",
            ]);

            for reservation in &view.items {
                builder.push_record(vec![
                    reservation.id.clone(),
                    reservation.priority.label().to_string(),
                    reservation.event_title.clone(),
                    reservation.organizer.organization.clone(),
                    reservation.facility.name.clone(),
                    schedule(reservation),
                    format_submitted(reservation.submitted_at, now),
                ]);
            }

            let mut table = builder.build();
            table.with(Style::modern());
            output.push_str(&table.to_string());
            output.push('\n');

            if view.items.len() < view.matched {
                output.push_str(&format!(
                    "Showing {} of {} matching reservations.\n",
                    view.items.len(),
                    view.matched
                ));
            }
        }

        if self.show_legend && view.total_pending > 0 {
            output.push('\n');
            output.push_str(&Self::legend());
            output.push('\n');
            output.push_str(SCHEDULING_NOTE);
            output.push('\n');
        }

        output
    }

    fn format_reservation(&self, reservation: &Reservation) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:           {}\n", reservation.id));
        output.push_str(&format!("Event:        {}\n", reservation.event_title));
        output.push_str(&format!(
            "Priority:     {} Priority ({})\n",
            reservation.priority.as_str(),
            reservation.priority.category()
        ));
        if !reservation.event_type.is_empty() {
            output.push_str(&format!("Type:         {}\n", reservation.event_type_label()));
        }
        output.push_str(&format!(
            "Organization: {}\n",
            reservation.organizer.organization
        ));
        output.push_str(&format!(
            "Requested by: {} ({})\n",
            reservation.organizer.name, reservation.organizer.id_number
        ));
        output.push_str(&format!("Facility:     {}\n", reservation.facility.name));
        output.push_str(&format!("Attendees:    {}\n", reservation.expected_attendees));
        output.push_str(&format!("Schedule:     {}\n", schedule(reservation)));
        output.push_str(&format!(
            "Submitted:    {}\n",
            format_submitted(reservation.submitted_at, Utc::now())
        ));

        if let Some(purpose) = &reservation.purpose {
            output.push_str(&format!("Purpose:      {}\n", purpose));
        }

        output
    }

    fn format_dispatch(&self, action: ApprovalAction, reservation: &Reservation) -> String {
        format!(
            "✓ {} {}: {}",
            action.past_tense(),
            reservation.id,
            reservation.event_title
        )
    }

    fn format_decisions(&self, decisions: &[Decision]) -> String {
        if decisions.is_empty() {
            return "No decisions recorded.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Reservation", "Action", "Decided", "Reviewer", "Note"]);

        for decision in decisions {
            builder.push_record(vec![
                decision.reservation_id.clone(),
                decision.action.to_string(),
                decided_at(decision.decided_at),
                decision.reviewer.clone().unwrap_or_default(),
                decision.note.clone().unwrap_or_default(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        if self.use_color {
            let mut buffer = Buffer::ansi();
            let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
            let _ = write!(buffer, "Error:");
            let _ = buffer.reset();
            let _ = write!(buffer, " {}", error);
            String::from_utf8_lossy(buffer.as_slice()).to_string()
        } else {
            format!("Error: {}", error)
        }
    }
}

/// Plain text output formatter.
///
/// One tab-separated line per item, without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_queue(&self, view: &QueueView) -> String {
        if let Some(message) = empty_message(view.state) {
            return message.to_string();
        }

        let mut output = String::new();
        for reservation in &view.items {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\n",
                reservation.id,
                reservation.priority,
                reservation.submitted_at,
                reservation.event_title,
                reservation.organizer.organization
            ));
        }
        output
    }

    fn format_reservation(&self, reservation: &Reservation) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", reservation.id));
        output.push_str(&format!("{}\n", reservation.event_title));
        output.push_str(&format!("{}\n", reservation.priority));
        output.push_str(&format!("{}\n", reservation.organizer.organization));
        output.push_str(&format!("{}\n", reservation.organizer.name));
        output.push_str(&format!("{}\n", reservation.submitted_at));

        output
    }

    fn format_dispatch(&self, action: ApprovalAction, reservation: &Reservation) -> String {
        format!("{}\t{}", action, reservation.id)
    }

    fn format_decisions(&self, decisions: &[Decision]) -> String {
        let mut output = String::new();
        for decision in decisions {
            output.push_str(&format!(
                "{}\t{}\t{}\n",
                decision.reservation_id, decision.action, decision.decided_at
            ));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON)
/// * `show_legend` - Whether table output includes the legend and note
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str, use_color: bool, show_legend: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color, show_legend)),
    }
}
