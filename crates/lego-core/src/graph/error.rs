use thiserror::Error;

use lego_model::{ContainerId, Direction, SlotIndex, TaskId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("task already registered: {0}")]
    DuplicateTask(TaskId),

    #[error("container already exists: {0}")]
    DuplicateContainer(ContainerId),

    #[error("unknown task: {0}")]
    UnknownTask(TaskId),

    #[error("unknown container: {0}")]
    UnknownContainer(ContainerId),

    #[error("{direction:?} slot {slot} of task {task} is already connected")]
    SlotTaken {
        task: TaskId,
        direction: Direction,
        slot: SlotIndex,
    },
}
