use std::{
    collections::HashSet,
    sync::{PoisonError, RwLock},
};

use super::{LibraryLoader, LoadError};

/// Loader backed by a fixed allow-list, for dry runs and tests.
#[derive(Debug, Default)]
pub struct StaticLoader {
    /// `None` accepts every name.
    allowed: Option<HashSet<String>>,
    loaded: RwLock<Vec<String>>,
}

impl StaticLoader {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: Some(allowed.into_iter().map(Into::into).collect()),
            loaded: RwLock::new(Vec::new()),
        }
    }

    /// Accepts every library.
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Libraries loaded so far, in load order and without repeats.
    pub fn loaded(&self) -> Vec<String> {
        self.loaded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LibraryLoader for StaticLoader {
    fn name(&self) -> &'static str {
        "static"
    }

    fn load(&self, library: &str) -> Result<(), LoadError> {
        if let Some(allowed) = &self.allowed
            && !allowed.contains(library)
        {
            return Err(LoadError::Rejected(library.to_string()));
        }

        let mut loaded = self.loaded.write().unwrap_or_else(PoisonError::into_inner);
        if !loaded.iter().any(|l| l == library) {
            loaded.push(library.to_string());
        }
        Ok(())
    }
}
