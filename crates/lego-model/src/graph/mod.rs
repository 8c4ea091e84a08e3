mod container;
pub use container::ContainerSpec;

mod task;
pub use task::TaskSpec;

mod edge;
pub use edge::{Direction, Edge};
