use thiserror::Error;

use crate::{graph::GraphError, loader::LoadError, options::OptionsError};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("library error: {0}")]
    Library(#[from] LoadError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("options error: {0}")]
    Options(#[from] OptionsError),
}
