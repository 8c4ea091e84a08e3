use serde::{Deserialize, Serialize};

/// How the analysis libraries reach the grid worker nodes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LibraryMode {
    /// Libraries are linked from the installed software release.
    #[default]
    Shared,
    /// The flow libraries are shipped as `.par` packages and built on the node.
    Packaged,
}

impl LibraryMode {
    /// Maps the "use par files" switch onto a mode.
    pub fn from_par_flag(use_par_files: bool) -> Self {
        if use_par_files {
            LibraryMode::Packaged
        } else {
            LibraryMode::Shared
        }
    }
}
