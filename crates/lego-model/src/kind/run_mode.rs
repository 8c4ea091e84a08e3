use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Operating mode of the grid plugin.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Generate, submit and merge in one pass.
    Full,
    /// Run locally on a small number of grid files.
    #[default]
    Test,
    /// Only generate the job files, without contacting the grid.
    Offline,
    /// Generate and submit, but do not merge.
    Submit,
    /// Merge the outputs of a previous submission.
    Terminate,
}

impl RunMode {
    /// Returns the token the grid plugin expects:
    /// - `"full"`
    /// - `"test"`
    /// - `"offline"`
    /// - `"submit"`
    /// - `"terminate"`
    pub fn as_str(&self) -> &'static str {
        match self {
            RunMode::Full => "full",
            RunMode::Test => "test",
            RunMode::Offline => "offline",
            RunMode::Submit => "submit",
            RunMode::Terminate => "terminate",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        match norm.as_str() {
            "full" => Ok(RunMode::Full),
            "test" => Ok(RunMode::Test),
            "offline" => Ok(RunMode::Offline),
            "submit" => Ok(RunMode::Submit),
            "terminate" => Ok(RunMode::Terminate),
            _ => Err(ModelError::InvalidRunMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(" Test ".parse::<RunMode>().unwrap(), RunMode::Test);
        assert_eq!("TERMINATE".parse::<RunMode>().unwrap(), RunMode::Terminate);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "merge".parse::<RunMode>().unwrap_err();
        assert_eq!(err, ModelError::InvalidRunMode("merge".to_string()));
    }

    #[test]
    fn parse_accepts_every_token() {
        for mode in [
            RunMode::Full,
            RunMode::Test,
            RunMode::Offline,
            RunMode::Submit,
            RunMode::Terminate,
        ] {
            assert_eq!(mode.as_str().parse::<RunMode>().unwrap(), mode);
        }
    }

    #[test]
    fn default_is_test() {
        assert_eq!(RunMode::default(), RunMode::Test);
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&RunMode::Offline).unwrap();
        assert_eq!(json, r#""offline""#);
    }
}
