//! Appointment id generation.

use uuid::Uuid;

/// Generate a fresh appointment id.
///
/// Ids are UUID v4 in hyphenated form. Uniqueness is by construction; the
/// store does not deduplicate on append.
pub fn new_appointment_id() -> String {
    Uuid::new_v4().to_string()
}
