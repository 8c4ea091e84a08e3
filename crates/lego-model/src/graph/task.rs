use serde::{Deserialize, Serialize};

use crate::{TaskId, TaskParams};

/// An analysis task to be registered with a task graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    pub name: TaskId,
    /// Implementation class of the task.
    pub class: String,
    #[serde(default, skip_serializing_if = "TaskParams::is_empty")]
    pub params: TaskParams,
}

impl TaskSpec {
    pub fn new(name: impl Into<TaskId>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            params: TaskParams::new(),
        }
    }

    pub fn with_param<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.params.set(key, value);
        self
    }

    pub fn set_param<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.params.set(key, value);
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key)
    }
}
