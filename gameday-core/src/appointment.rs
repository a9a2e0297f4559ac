//! Appointment record types.
//!
//! An appointment is a scheduled gaming session on one server (guild).
//! The guild data is embedded as a snapshot taken at creation time, not a
//! live reference, so stored appointments stay readable even if the guild
//! changes or disappears.

use serde::{Deserialize, Serialize};

/// A scheduled gaming session, as persisted in the appointment slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique id, generated client-side at creation time (see [`crate::id`]).
    pub id: String,
    /// Snapshot of the guild the session was scheduled on.
    pub guild: Guild,
    /// Selected category id from the fixed catalog; empty means "no category".
    pub category: String,
    /// Display-formatted date string ("{day}/{month} às {hour}:{minute}h").
    /// Free text by contract, not a validated calendar date.
    pub date: String,
    /// Free-text description. The input surface caps it at 100 characters;
    /// the storage layer does not enforce that.
    pub description: String,
}

/// Guild (server) metadata embedded in an appointment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Guild {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    /// Whether the current user owns this guild.
    pub owner: bool,
}
