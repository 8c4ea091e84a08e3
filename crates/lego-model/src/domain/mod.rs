mod kv;
pub use kv::KeyValue;

mod task_params;
pub use task_params::TaskParams;

mod ids;
pub use ids::{ContainerId, DataClass, TaskId};

/// Index of an input or output slot on a task.
///
/// Slots are numbered per direction, so input 1 and output 1 are distinct.
pub type SlotIndex = u32;

/// Time-to-live of a grid job in seconds.
///
/// Forwarded to the grid plugin verbatim; nothing in this workspace enforces it.
pub type TtlSecs = u64;
