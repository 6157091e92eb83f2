use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Value};

use crate::codes::ClientError;
use crate::entities::ServiceTask;

/// One step of a job being composed.
///
/// Each input key is either given a value (`input`) or linked to an output of
/// the previous step (`linked_input`), never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskDraft {
    pub task_id: i64,
    input: BTreeMap<String, Value>,
    linked_input: BTreeMap<String, String>,
}

impl TaskDraft {
    pub fn new(task_id: i64) -> Self {
        Self {
            task_id,
            input: BTreeMap::new(),
            linked_input: BTreeMap::new(),
        }
    }

    pub fn input(&self) -> &BTreeMap<String, Value> {
        &self.input
    }

    pub fn linked_input(&self) -> &BTreeMap<String, String> {
        &self.linked_input
    }

    pub fn set_input(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        self.linked_input.remove(&key);
        self.input.insert(key, value);
    }

    pub fn link_input(&mut self, key: impl Into<String>, upstream_output: impl Into<String>) {
        let key = key.into();
        self.input.remove(&key);
        self.linked_input.insert(key, upstream_output.into());
    }

    /// Flip the "linked" checkbox of `key`: turning it on drops the direct
    /// value, turning it off drops the link.
    pub fn set_linked(&mut self, key: &str, linked: bool) {
        if linked {
            self.input.remove(key);
        } else {
            self.linked_input.remove(key);
        }
    }

    pub fn is_linked(&self, key: &str) -> bool {
        self.linked_input.contains_key(key)
    }

    /// A declared input counts as filled once it has a value or a link.
    fn is_filled(&self, key: &str) -> bool {
        self.input.contains_key(key) || self.linked_input.contains_key(key)
    }

    fn has_blank_input(&self) -> bool {
        self.input.values().any(|value| match value {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            _ => false,
        })
    }
}

/// The job being composed on the create-job screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobDraft {
    pub publication_date: Option<i64>,
    pub expiration_date: Option<i64>,
    tasks: Vec<TaskDraft>,
    selected: Vec<ServiceTask>,
}

impl JobDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// No tasks and no dates.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
            && self.selected.is_empty()
            && self.publication_date.is_none()
            && self.expiration_date.is_none()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn tasks(&self) -> &[TaskDraft] {
        &self.tasks
    }

    /// Service tasks in the order they were added, for display
    pub fn selected(&self) -> &[ServiceTask] {
        &self.selected
    }

    pub fn add_task(&mut self, task: ServiceTask) -> usize {
        self.tasks.push(TaskDraft::new(task.id));
        self.selected.push(task);
        self.tasks.len() - 1
    }

    pub fn remove_task(&mut self, index: usize) -> Option<TaskDraft> {
        if index >= self.tasks.len() {
            return None;
        }
        self.selected.remove(index);
        Some(self.tasks.remove(index))
    }

    pub fn task_mut(&mut self, index: usize) -> Option<&mut TaskDraft> {
        self.tasks.get_mut(index)
    }

    /// Both dates set, at least one task, and every declared task input
    /// either linked or given a non-blank value.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.publication_date.is_none() || self.expiration_date.is_none() {
            return Err(ClientError::MissingFields);
        }
        if self.tasks.is_empty() {
            return Err(ClientError::MissingFields);
        }
        if self.tasks.iter().any(TaskDraft::has_blank_input) {
            return Err(ClientError::MissingFields);
        }
        let unfilled = self
            .tasks
            .iter()
            .zip(&self.selected)
            .any(|(draft, task)| task.input.keys().any(|key| !draft.is_filled(key)));
        if unfilled {
            return Err(ClientError::MissingFields);
        }
        Ok(())
    }

    /// Request body of `POST /api/job`.
    pub fn to_payload(&self) -> Value {
        json!({
            "publication_date": self.publication_date,
            "expiration_date": self.expiration_date,
            "tasks": self.tasks,
        })
    }
}
