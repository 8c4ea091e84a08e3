mod run_mode;
pub use run_mode::RunMode;

mod library_mode;
pub use library_mode::LibraryMode;

mod container;
pub use container::ContainerKind;
