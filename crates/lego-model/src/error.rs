use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid run mode: {0} (expected: full|test|offline|submit|terminate)")]
    InvalidRunMode(String),
}
