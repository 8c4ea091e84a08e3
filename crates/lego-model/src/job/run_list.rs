use serde::{Deserialize, Serialize};

/// Identifier of a data-taking period.
pub type RunNumber = u32;

/// Ordered list of runs a grid job processes.
///
/// Order is preserved as given and duplicates are kept; the grid plugin decides what to do with them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunList(Vec<RunNumber>);

impl RunList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, run: RunNumber) {
        self.0.push(run);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, run: RunNumber) -> bool {
        self.0.contains(&run)
    }

    pub fn as_slice(&self) -> &[RunNumber] {
        &self.0
    }

    /// Run numbers as they appear in grid paths, e.g. `000246994` for prefix `000`.
    pub fn prefixed(&self, prefix: &str) -> Vec<String> {
        self.0.iter().map(|run| format!("{prefix}{run}")).collect()
    }

    /// Runs joined by `_`, as used in working and output directory names.
    pub fn tag(&self) -> String {
        self.0
            .iter()
            .map(|run| run.to_string())
            .collect::<Vec<_>>()
            .join("_")
    }
}

impl FromIterator<RunNumber> for RunList {
    fn from_iter<I: IntoIterator<Item = RunNumber>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
