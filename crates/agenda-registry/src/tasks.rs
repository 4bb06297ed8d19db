use agenda_core::task::{DESCRIPTION, NAME};
use agenda_core::Task;

use crate::registry::Registry;

pub type TaskRegistry = Registry<Task>;

impl Registry<Task> {
    pub fn add_task(&self, task: Task) -> bool {
        self.add(task)
    }

    pub fn delete_task(&self, task_id: &str) -> bool {
        self.delete(task_id)
    }

    pub fn update_task_name(&self, task_id: &str, name: impl Into<Option<String>>) -> bool {
        let name = name.into();
        self.update(task_id, NAME.name, |t| t.set_name(name))
    }

    pub fn update_task_description(
        &self,
        task_id: &str,
        description: impl Into<Option<String>>,
    ) -> bool {
        let description = description.into();
        self.update(task_id, DESCRIPTION.name, |t| t.set_description(description))
    }
}
