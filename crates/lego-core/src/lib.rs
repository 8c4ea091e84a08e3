pub mod error;
pub use error::CoreError;

pub mod graph;
pub use graph::{GraphError, GraphSnapshot, TaskGraph};

pub mod loader;
pub use loader::{LibraryLoader, LoadError, SearchPathLoader, StaticLoader};

pub mod options;
pub use options::OptionsError;

pub mod grid;
pub use grid::configure_grid_job;

pub mod train;
pub use train::{
    AnalysisWiring, QnTaskFactory, TaskFactory, Wiring, wire_from_config_path, wire_qn_tasks,
};
