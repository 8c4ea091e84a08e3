use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use tracing::trace;

use super::{LibraryLoader, LoadError};

/// Resolves libraries against an ordered list of directories, first match wins.
///
/// Absolute names are checked as given and never searched for.
#[derive(Debug, Default)]
pub struct SearchPathLoader {
    dirs: Vec<PathBuf>,
    resolved: RwLock<HashMap<String, PathBuf>>,
}

impl SearchPathLoader {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
            resolved: RwLock::new(HashMap::new()),
        }
    }

    /// Build the search list from a path-list variable such as `LD_LIBRARY_PATH`.
    ///
    /// An unset variable gives an empty search list.
    pub fn from_env(var: &str) -> Self {
        let dirs: Vec<PathBuf> = std::env::var_os(var)
            .map(|v| std::env::split_paths(&v).filter(|p| !p.as_os_str().is_empty()).collect())
            .unwrap_or_default();
        Self {
            dirs,
            resolved: RwLock::new(HashMap::new()),
        }
    }

    /// Path a library was resolved to, if it has been loaded.
    pub fn resolved(&self, library: &str) -> Option<PathBuf> {
        self.resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(library)
            .cloned()
    }

    fn locate(&self, library: &str) -> Option<PathBuf> {
        let path = Path::new(library);
        if path.is_absolute() {
            return path.is_file().then(|| path.to_path_buf());
        }
        self.dirs
            .iter()
            .map(|dir| dir.join(library))
            .find(|candidate| candidate.is_file())
    }
}

impl LibraryLoader for SearchPathLoader {
    fn name(&self) -> &'static str {
        "search-path"
    }

    fn load(&self, library: &str) -> Result<(), LoadError> {
        if self.resolved(library).is_some() {
            return Ok(());
        }

        let path = self.locate(library).ok_or_else(|| LoadError::NotFound {
            name: library.to_string(),
            searched: self.dirs.clone(),
        })?;
        trace!(library, path = %path.display(), "library resolved");

        self.resolved
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(library.to_string(), path);
        Ok(())
    }
}
