//! Agenda Registry - concurrent keyed stores for agenda entities.
//!
//! One generic [`Registry`] backs all three entity kinds; the per-kind
//! modules add field-specific update operations on top of it.

pub mod appointments;
pub mod contacts;
pub mod registry;
pub mod tasks;

pub use appointments::AppointmentRegistry;
pub use contacts::ContactRegistry;
pub use registry::{Registry, RegistryConfig};
pub use tasks::TaskRegistry;
