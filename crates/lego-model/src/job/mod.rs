mod run_list;
pub use run_list::{RunList, RunNumber};

mod library_list;
pub use library_list::LibraryList;

mod job_config;
pub use job_config::JobConfig;
