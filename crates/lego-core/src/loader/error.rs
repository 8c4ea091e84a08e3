use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("library {name} not found in {} search path(s)", .searched.len())]
    NotFound { name: String, searched: Vec<PathBuf> },

    #[error("library {0} is not available to this loader")]
    Rejected(String),
}
