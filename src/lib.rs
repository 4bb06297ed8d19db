//! Agenda - validated in-memory registries for contacts, tasks and appointments.

pub mod config;
pub mod state;

pub use agenda_core::{
    appointment, contact, task, Appointment, Contact, FieldRule, Record, Task, ValidationError,
    Validator,
};
pub use agenda_registry::{
    AppointmentRegistry, ContactRegistry, Registry, RegistryConfig, TaskRegistry,
};
pub use config::{Config, ConfigError};
pub use state::Agenda;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a formatting tracing subscriber.
/// Does nothing if a global subscriber is already set.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
