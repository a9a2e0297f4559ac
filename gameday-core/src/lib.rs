//! Core types and storage for the gameday ecosystem.
//!
//! This crate provides everything gameday-cli needs below the terminal:
//! - `Appointment` and related types for scheduled gaming sessions
//! - `store` module for the persisted appointment slot
//! - `form` module for assembling a new appointment from user input

pub mod appointment;
pub mod category;
pub mod codec;
pub mod config;
pub mod error;
pub mod form;
pub mod id;
pub mod store;
pub mod widget;

// Re-export the main types at crate root for convenience
pub use appointment::{Appointment, Guild};
pub use error::{StoreError, StoreResult};
pub use store::AppointmentStore;
