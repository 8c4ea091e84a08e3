//! Plain data model shared by the grid-job and task-wiring configurators.
//!
//! Nothing in this crate performs I/O; every type is a serde-friendly value.

mod error;
pub use error::ModelError;

mod domain;
pub use domain::*;

mod kind;
pub use kind::*;

mod job;
pub use job::*;

mod graph;
pub use graph::*;

mod train;
pub use train::TrainOptions;
