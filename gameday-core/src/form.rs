//! Form session for assembling a new appointment.
//!
//! Holds the working field values while the user edits. Nothing is persisted
//! until the caller commits and passes the result to
//! [`AppointmentStore::append`](crate::store::AppointmentStore::append).

use crate::appointment::{Appointment, Guild};
use crate::id;

/// Transient in-memory state for an appointment being created.
///
/// Setters are pure in-memory updates with no validation; the input surface
/// owns input constraints (numeric day/month, the 100-char description cap).
#[derive(Debug, Default)]
pub struct FormSession {
    guild: Option<Guild>,
    category: String,
    day: String,
    month: String,
    hour: String,
    minute: String,
    description: String,
}

impl FormSession {
    pub fn new() -> Self {
        FormSession::default()
    }

    pub fn select_guild(&mut self, guild: Guild) {
        self.guild = Some(guild);
    }

    /// Toggle the category selection. Selecting the currently selected id
    /// clears it; any other id replaces the selection. At most one category
    /// is selected at a time.
    pub fn toggle_category(&mut self, category_id: &str) {
        if self.category == category_id {
            self.category.clear();
        } else {
            self.category = category_id.to_string();
        }
    }

    pub fn selected_category(&self) -> &str {
        &self.category
    }

    pub fn set_day(&mut self, day: impl Into<String>) {
        self.day = day.into();
    }

    pub fn set_month(&mut self, month: impl Into<String>) {
        self.month = month.into();
    }

    pub fn set_hour(&mut self, hour: impl Into<String>) {
        self.hour = hour.into();
    }

    pub fn set_minute(&mut self, minute: impl Into<String>) {
        self.minute = minute.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Assemble a new appointment from the current field values.
    ///
    /// Generates a fresh id and formats the date for display. Does not
    /// persist anything and does not consume the session.
    pub fn commit(&self) -> Appointment {
        Appointment {
            id: id::new_appointment_id(),
            guild: self.guild.clone().unwrap_or_default(),
            category: self.category.clone(),
            date: format!(
                "{}/{} às {}:{}h",
                self.day, self.month, self.hour, self.minute
            ),
            description: self.description.clone(),
        }
    }
}
