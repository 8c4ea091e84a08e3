//! Grid-job configuration for the flow analysis on LHC15o AODs.

use lego_model::{JobConfig, LibraryList, LibraryMode, RunList, RunMode};
use tracing::debug;

/// Runs processed by every submission, in submission order.
pub const RUNS: [u32; 3] = [246994, 246991, 246989];

/// Framework libraries loaded in both library modes.
const BASE_LIBS: [&str; 19] = [
    "libGui.so",
    "libProof.so",
    "libMinuit.so",
    "libXMLParser.so",
    "libRAWDatabase.so",
    "libRAWDatarec.so",
    "libCDB.so",
    "libSTEERBase.so",
    "libSTEER.so",
    "libTPCbase.so",
    "libTOFbase.so",
    "libTOFrec.so",
    "libTRDbase.so",
    "libVZERObase.so",
    "libVZEROrec.so",
    "libT0base.so",
    "libT0rec.so",
    "libTender.so",
    "libTenderSupplies.so",
];

/// Flow libraries, linked in [`LibraryMode::Shared`].
const FLOW_LIBS: [&str; 2] = ["libPWGflowBase.so", "libPWGflowTasks.so"];

/// Flow packages, built on the worker in [`LibraryMode::Packaged`].
const FLOW_PACKAGES: [&str; 2] = ["PWGflowBase.par", "PWGflowTasks.par"];

const CUTS_TAG: &str = "AddTaskCRC_AOD_pt_0_3";

/// Build the job configuration; `use_par_files` ships the flow libraries as packages.
pub fn configure_grid_job(use_par_files: bool) -> JobConfig {
    configure_for(LibraryMode::from_par_flag(use_par_files))
}

/// Build the job configuration for an explicit library mode.
pub fn configure_for(mode: LibraryMode) -> JobConfig {
    let runs: RunList = RUNS.into_iter().collect();
    let (additional_libs, packages) = libraries_for(mode);

    let cfg = JobConfig {
        run_mode: RunMode::Test,
        n_test_files: 1,
        api_version: "V1.1x".to_string(),
        aliphysics_version: "vAN-20200724-1".to_string(),
        grid_data_dir: "/alice/data/2015/LHC15o".to_string(),
        data_pattern: "/pass1/AOD194/*AliAOD.root".to_string(),
        run_prefix: "000".to_string(),
        output_to_run_no: true,
        grid_working_dir: format!("wdir_LHC2015o_{}_{CUTS_TAG}", runs.tag()),
        grid_output_dir: format!("output_LHC2015o_{}_{CUTS_TAG}", runs.tag()),
        runs,
        additional_libs,
        packages,
        default_outputs: true,
        analysis_macro: "flowAnalysis.C".to_string(),
        split_max_input_file_number: 80,
        nruns_per_master: 1,
        overwrite_mode: true,
        max_init_failed: 5,
        master_resubmit_threshold: 90,
        ttl: 86_400,
        input_format: "xml-single".to_string(),
        jdl_name: "flowAnalysis.jdl".to_string(),
        price: 1,
        split_mode: "se".to_string(),
    };

    debug!(
        ?mode,
        run_mode = %cfg.run_mode,
        runs = %cfg.runs.tag(),
        libs = cfg.additional_libs.len(),
        packages = cfg.packages.len(),
        "grid job configured"
    );
    cfg
}

fn libraries_for(mode: LibraryMode) -> (LibraryList, Vec<String>) {
    match mode {
        LibraryMode::Shared => (
            BASE_LIBS.iter().chain(FLOW_LIBS.iter()).copied().collect(),
            Vec::new(),
        ),
        LibraryMode::Packaged => (
            BASE_LIBS.iter().copied().collect(),
            FLOW_PACKAGES.iter().map(|p| p.to_string()).collect(),
        ),
    }
}
