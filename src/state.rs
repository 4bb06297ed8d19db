use std::sync::Arc;

use agenda_registry::{AppointmentRegistry, ContactRegistry, TaskRegistry};

use crate::config::Config;

/// One registry per entity kind, shared by cloning the handle.
#[derive(Clone, Default)]
pub struct Agenda {
    pub contacts: Arc<ContactRegistry>,
    pub tasks: Arc<TaskRegistry>,
    pub appointments: Arc<AppointmentRegistry>,
}

impl Agenda {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        tracing::info!(
            capacity = config.registry.capacity,
            shards = ?config.registry.shards,
            "creating agenda registries"
        );
        Self {
            contacts: Arc::new(ContactRegistry::with_config(config.registry)),
            tasks: Arc::new(TaskRegistry::with_config(config.registry)),
            appointments: Arc::new(AppointmentRegistry::with_config(config.registry)),
        }
    }
}
