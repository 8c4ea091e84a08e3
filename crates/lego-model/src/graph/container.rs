use serde::{Deserialize, Serialize};

use crate::{ContainerId, ContainerKind, DataClass};

/// Declaration of a named data slot in the task graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSpec {
    pub name: ContainerId,
    pub data_class: DataClass,
    pub kind: ContainerKind,
    /// File the container is written to. Only meaningful for persistent kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl ContainerSpec {
    pub fn new(
        name: impl Into<ContainerId>,
        data_class: impl Into<DataClass>,
        kind: ContainerKind,
    ) -> Self {
        Self {
            name: name.into(),
            data_class: data_class.into(),
            kind,
            file_name: None,
        }
    }

    /// Output container written to `file_name`.
    pub fn output(
        name: impl Into<ContainerId>,
        data_class: impl Into<DataClass>,
        file_name: impl Into<String>,
    ) -> Self {
        Self::new(name, data_class, ContainerKind::Output).with_file(file_name)
    }

    /// In-memory container passed between tasks.
    pub fn exchange(name: impl Into<ContainerId>, data_class: impl Into<DataClass>) -> Self {
        Self::new(name, data_class, ContainerKind::Exchange)
    }

    pub fn with_file(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }
}
