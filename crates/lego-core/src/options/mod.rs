//! Loading of train options from the configuration directory of a wagon.

use std::{
    fs,
    path::{Path, PathBuf},
};

use lego_model::TrainOptions;
use thiserror::Error;
use tracing::debug;

/// File looked up when the configuration path is a directory.
pub const OPTIONS_FILE: &str = "runOptions.json";

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolve `config_path` to the options file it designates.
pub fn options_file(config_path: &Path) -> PathBuf {
    if config_path.is_dir() {
        config_path.join(OPTIONS_FILE)
    } else {
        config_path.to_path_buf()
    }
}

/// Read [`TrainOptions`] from a JSON file, or from [`OPTIONS_FILE`] inside a directory.
pub fn load_options(config_path: impl AsRef<Path>) -> Result<TrainOptions, OptionsError> {
    let path = options_file(config_path.as_ref());
    let raw = fs::read_to_string(&path).map_err(|source| OptionsError::Io {
        path: path.clone(),
        source,
    })?;
    let opts = serde_json::from_str(&raw).map_err(|source| OptionsError::Parse {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), ?opts, "train options loaded");
    Ok(opts)
}
