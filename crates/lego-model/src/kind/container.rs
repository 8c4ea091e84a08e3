use serde::{Deserialize, Serialize};

/// Role of a data container in the task graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContainerKind {
    /// Feeds events into the graph. Every graph owns exactly one common input.
    Input,
    /// Written to a file at the end of the pass.
    Output,
    /// Passes data between tasks in memory, never persisted.
    Exchange,
}
