//! Agenda Core - entity types, field rules, and validation.
//!
//! Contacts, tasks and appointments are plain values that validate every
//! field on construction and on each setter call. Storage lives in
//! `agenda-registry`.

pub mod appointment;
pub mod contact;
pub mod entity;
pub mod error;
pub mod task;
pub mod validation;

pub use appointment::Appointment;
pub use contact::Contact;
pub use entity::Record;
pub use error::ValidationError;
pub use task::Task;
pub use validation::{FieldRule, Validator};
