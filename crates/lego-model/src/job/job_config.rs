use serde::{Deserialize, Serialize};

use crate::{LibraryList, LibraryMode, RunList, RunMode, TtlSecs};

/// Parameters handed to the grid plugin for one submission.
///
/// The record is filled once and not validated here; a bad value only surfaces when the plugin submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobConfig {
    pub run_mode: RunMode,
    /// Number of input files processed in [`RunMode::Test`].
    pub n_test_files: u32,

    pub api_version: String,
    pub aliphysics_version: String,

    /// Grid directory searched for input files.
    pub grid_data_dir: String,
    /// File pattern below each run directory.
    pub data_pattern: String,
    /// Zero padding prepended to run numbers in grid paths.
    pub run_prefix: String,
    pub runs: RunList,
    /// Write outputs into one subdirectory per run.
    pub output_to_run_no: bool,

    /// Working directory relative to the grid home.
    pub grid_working_dir: String,
    /// Output directory relative to the working directory.
    pub grid_output_dir: String,

    pub additional_libs: LibraryList,
    /// `.par` packages enabled on the worker nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<String>,
    /// Let the plugin derive output files from the task graph.
    pub default_outputs: bool,

    /// Name of the generated analysis macro.
    pub analysis_macro: String,
    /// Maximum number of input files per subjob; `0` disables the limit.
    pub split_max_input_file_number: u32,
    pub nruns_per_master: u32,
    /// Overwrite existing input collections and output files.
    pub overwrite_mode: bool,
    /// Failed subjobs that trigger killing the waiting ones.
    pub max_init_failed: u32,
    /// Percentage of finished subjobs below which failed ones are resubmitted.
    pub master_resubmit_threshold: u32,
    pub ttl: TtlSecs,
    pub input_format: String,
    pub jdl_name: String,
    pub price: u32,
    pub split_mode: String,
}

impl JobConfig {
    /// Library mode implied by the enabled packages.
    pub fn library_mode(&self) -> LibraryMode {
        LibraryMode::from_par_flag(!self.packages.is_empty())
    }

    /// Run numbers as the plugin writes them into grid paths.
    pub fn run_paths(&self) -> Vec<String> {
        self.runs
            .prefixed(&self.run_prefix)
            .into_iter()
            .map(|run| format!("{}/{}", self.grid_data_dir, run))
            .collect()
    }
}

impl Default for JobConfig {
    /// Values the grid plugin assumes when a setter is never called.
    fn default() -> Self {
        Self {
            run_mode: RunMode::default(),
            n_test_files: 10,
            api_version: String::new(),
            aliphysics_version: String::new(),
            grid_data_dir: String::new(),
            data_pattern: "*AliESDs.root".to_string(),
            run_prefix: String::new(),
            runs: RunList::new(),
            output_to_run_no: false,
            grid_working_dir: String::new(),
            grid_output_dir: "output".to_string(),
            additional_libs: LibraryList::new(),
            packages: Vec::new(),
            default_outputs: true,
            analysis_macro: "MyAnalysis.C".to_string(),
            split_max_input_file_number: 100,
            nruns_per_master: 1,
            overwrite_mode: false,
            max_init_failed: 0,
            master_resubmit_threshold: 0,
            ttl: 30_000,
            input_format: "xml-single".to_string(),
            jdl_name: "analysis.jdl".to_string(),
            price: 1,
            split_mode: "se".to_string(),
        }
    }
}
