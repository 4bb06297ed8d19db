use serde::Serialize;

use crate::entity::Record;
use crate::error::ValidationError;
use crate::validation::FieldRule;

pub const TASK_ID: FieldRule = FieldRule::new("task ID", 1, 10);
pub const NAME: FieldRule = FieldRule::new("name", 1, 20);
pub const DESCRIPTION: FieldRule = FieldRule::new("description", 1, 50);

/// Task field table in declaration order.
pub const FIELDS: &[FieldRule] = &[TASK_ID, NAME, DESCRIPTION];

/// A named unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    task_id: String,
    name: String,
    description: String,
}

impl Task {
    /// Build a task, validating ID, name, then description.
    /// The first invalid field aborts construction.
    pub fn new(
        task_id: impl Into<Option<String>>,
        name: impl Into<Option<String>>,
        description: impl Into<Option<String>>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            task_id: TASK_ID.accept(task_id.into())?,
            name: NAME.accept(name.into())?,
            description: DESCRIPTION.accept(description.into())?,
        })
    }

    /// Get the task ID. It is fixed at construction.
    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    /// Get the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Set the name (1-20 chars). Unchanged on error.
    pub fn set_name(&mut self, name: impl Into<Option<String>>) -> Result<(), ValidationError> {
        self.name = NAME.accept(name.into())?;
        Ok(())
    }

    /// Set the description (1-50 chars). Unchanged on error.
    pub fn set_description(
        &mut self,
        description: impl Into<Option<String>>,
    ) -> Result<(), ValidationError> {
        self.description = DESCRIPTION.accept(description.into())?;
        Ok(())
    }
}

impl Record for Task {
    const KIND: &'static str = "task";

    fn id(&self) -> &str {
        &self.task_id
    }
}
