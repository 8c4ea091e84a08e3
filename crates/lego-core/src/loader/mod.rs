//! Resolution of the shared libraries a wagon needs before it can build its tasks.

mod error;
pub use error::LoadError;

mod search_path;
pub use search_path::SearchPathLoader;

mod fixed;
pub use fixed::StaticLoader;

/// Makes a named shared library available to the process.
///
/// Implementations must treat a repeated load of the same name as a successful no-op.
pub trait LibraryLoader {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn load(&self, library: &str) -> Result<(), LoadError>;
}

/// Load `libraries` in order, stopping at the first failure.
pub fn load_all<'a, I>(loader: &dyn LibraryLoader, libraries: I) -> Result<(), LoadError>
where
    I: IntoIterator<Item = &'a str>,
{
    for lib in libraries {
        loader.load(lib)?;
        tracing::debug!(loader = loader.name(), library = lib, "library loaded");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_all_stops_at_first_failure() {
        let loader = StaticLoader::new(["libA.so", "libC.so"]);
        let err = load_all(&loader, ["libA.so", "libB.so", "libC.so"]).unwrap_err();

        assert_eq!(err, LoadError::Rejected("libB.so".to_string()));
        assert_eq!(loader.loaded(), vec!["libA.so".to_string()]);
    }
}
