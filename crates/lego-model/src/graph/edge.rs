use serde::{Deserialize, Serialize};

use crate::{ContainerId, SlotIndex, TaskId};

/// Whether a container feeds a task or receives its output.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Input,
    Output,
}

/// A declared connection between a task slot and a container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub task: TaskId,
    pub slot: SlotIndex,
    pub container: ContainerId,
    pub direction: Direction,
}

impl Edge {
    pub fn input(task: TaskId, slot: SlotIndex, container: ContainerId) -> Self {
        Self {
            task,
            slot,
            container,
            direction: Direction::Input,
        }
    }

    pub fn output(task: TaskId, slot: SlotIndex, container: ContainerId) -> Self {
        Self {
            task,
            slot,
            container,
            direction: Direction::Output,
        }
    }
}
