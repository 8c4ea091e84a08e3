//! Explicit task graph: tasks, named containers and the edges between them.
//!
//! The graph only records declarations. Nothing here schedules or runs tasks.

mod error;
pub use error::GraphError;

use std::collections::{HashMap, HashSet};

use lego_model::{
    ContainerId, ContainerKind, ContainerSpec, Direction, Edge, SlotIndex, TaskId, TaskSpec,
};
use serde::Serialize;
use tracing::{debug, trace};

/// Name of the container every graph starts with.
pub const COMMON_INPUT: &str = "cAUTO_INPUT";
const COMMON_INPUT_CLASS: &str = "TChain";

/// One graph per train run.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    tasks: Vec<TaskSpec>,
    task_index: HashMap<TaskId, usize>,
    containers: Vec<ContainerSpec>,
    container_index: HashMap<ContainerId, usize>,
    edges: Vec<Edge>,
    bound: HashSet<(TaskId, Direction, SlotIndex)>,
    common_input: ContainerId,
}

/// Serializable view of a [`TaskGraph`], in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSnapshot {
    pub tasks: Vec<TaskSpec>,
    pub containers: Vec<ContainerSpec>,
    pub edges: Vec<Edge>,
}

impl TaskGraph {
    /// Create a graph holding only the common input container.
    pub fn new() -> Self {
        let common_input = ContainerId::from(COMMON_INPUT);
        let input =
            ContainerSpec::new(common_input.clone(), COMMON_INPUT_CLASS, ContainerKind::Input);

        let mut container_index = HashMap::new();
        container_index.insert(common_input.clone(), 0);

        Self {
            tasks: Vec::new(),
            task_index: HashMap::new(),
            containers: vec![input],
            container_index,
            edges: Vec::new(),
            bound: HashSet::new(),
            common_input,
        }
    }

    /// Container that feeds events into the graph.
    #[inline]
    pub fn common_input(&self) -> &ContainerId {
        &self.common_input
    }

    /// Register a task. Task names are unique per graph.
    pub fn add_task(&mut self, spec: TaskSpec) -> Result<TaskId, GraphError> {
        if self.task_index.contains_key(&spec.name) {
            return Err(GraphError::DuplicateTask(spec.name));
        }
        let id = spec.name.clone();
        debug!(task = %id, class = %spec.class, "task registered");

        self.task_index.insert(id.clone(), self.tasks.len());
        self.tasks.push(spec);
        Ok(id)
    }

    /// Create a named container. Container names are unique per graph.
    pub fn create_container(&mut self, spec: ContainerSpec) -> Result<ContainerId, GraphError> {
        if self.container_index.contains_key(&spec.name) {
            return Err(GraphError::DuplicateContainer(spec.name));
        }
        let id = spec.name.clone();
        debug!(container = %id, kind = ?spec.kind, file = ?spec.file_name, "container created");

        self.container_index.insert(id.clone(), self.containers.len());
        self.containers.push(spec);
        Ok(id)
    }

    /// Feed `container` into input `slot` of `task`.
    pub fn connect_input(
        &mut self,
        task: &TaskId,
        slot: SlotIndex,
        container: &ContainerId,
    ) -> Result<Edge, GraphError> {
        self.connect(Edge::input(task.clone(), slot, container.clone()))
    }

    /// Write output `slot` of `task` into `container`.
    pub fn connect_output(
        &mut self,
        task: &TaskId,
        slot: SlotIndex,
        container: &ContainerId,
    ) -> Result<Edge, GraphError> {
        self.connect(Edge::output(task.clone(), slot, container.clone()))
    }

    fn connect(&mut self, edge: Edge) -> Result<Edge, GraphError> {
        if !self.task_index.contains_key(&edge.task) {
            return Err(GraphError::UnknownTask(edge.task));
        }
        if !self.container_index.contains_key(&edge.container) {
            return Err(GraphError::UnknownContainer(edge.container));
        }

        let key = (edge.task.clone(), edge.direction, edge.slot);
        if self.bound.contains(&key) {
            return Err(GraphError::SlotTaken {
                task: edge.task,
                direction: edge.direction,
                slot: edge.slot,
            });
        }
        self.bound.insert(key);

        trace!(
            task = %edge.task,
            slot = edge.slot,
            container = %edge.container,
            direction = ?edge.direction,
            "edge connected"
        );
        self.edges.push(edge.clone());
        Ok(edge)
    }

    /// Look up a registered task by name.
    pub fn task(&self, id: &TaskId) -> Option<&TaskSpec> {
        self.task_index.get(id).map(|&i| &self.tasks[i])
    }

    /// Look up a container by name.
    pub fn container(&self, id: &ContainerId) -> Option<&ContainerSpec> {
        self.container_index.get(id).map(|&i| &self.containers[i])
    }

    /// All tasks, in registration order.
    pub fn tasks(&self) -> &[TaskSpec] {
        &self.tasks
    }

    /// All containers, common input first.
    pub fn containers(&self) -> &[ContainerSpec] {
        &self.containers
    }

    /// All edges, in connection order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Input edges of `task`, in connection order.
    pub fn inputs_of<'a>(&'a self, task: &'a TaskId) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges_of(task, Direction::Input)
    }

    /// Output edges of `task`, in connection order.
    pub fn outputs_of<'a>(&'a self, task: &'a TaskId) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges_of(task, Direction::Output)
    }

    fn edges_of<'a>(
        &'a self,
        task: &'a TaskId,
        direction: Direction,
    ) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges
            .iter()
            .filter(move |e| &e.task == task && e.direction == direction)
    }

    /// Copy the current declarations into a serializable view.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            tasks: self.tasks.clone(),
            containers: self.containers.clone(),
            edges: self.edges.clone(),
        }
    }
}

impl Default for TaskGraph {
    fn default() -> Self {
        Self::new()
    }
}
