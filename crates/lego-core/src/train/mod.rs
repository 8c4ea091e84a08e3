//! Attaches the Qn-vector corrections wagon, and optionally its analysis task, to a train graph.

mod factory;
pub use factory::{QnTaskFactory, TaskFactory};

use std::path::Path;

use lego_model::{ContainerId, ContainerSpec, Edge, TaskId, TrainOptions};
use tracing::{error, info, instrument};

use crate::{
    error::CoreError,
    graph::TaskGraph,
    loader::{self, LibraryLoader},
    options,
};

/// Libraries the wagon needs, in load order.
pub const WAGON_LIBS: [&str; 3] = [
    "libPWGPPevcharQn.so",
    "libPWGPPevcharQnInterface.so",
    "libPWGJEEMCALJetTasks.so",
];

pub const ANALYSIS_QA_CONTAINER: &str = "QnAnalysisEventQA";
pub const ANALYSIS_QA_FILE: &str = "QnAnalysisEventQA.root";

pub const PARAM_EXPECTED_PASS: &str = "expectedCorrectionPass";
pub const PARAM_ALTERNATIVE_PASS: &str = "alternativeCorrectionPass";

/// Outcome of [`wire_qn_tasks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wiring {
    /// Not running inside a train; nothing was touched.
    Skipped,
    Wired {
        /// Container carrying the corrected Qn vectors.
        correction: ContainerId,
        analysis: Option<AnalysisWiring>,
    },
}

impl Wiring {
    /// Returns `true` when the guard stopped the wiring.
    pub fn is_skipped(&self) -> bool {
        matches!(self, Wiring::Skipped)
    }
}

/// What the analysis step added to the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisWiring {
    pub task: TaskId,
    pub output: ContainerId,
    /// Common input, corrected vectors, event QA output; in that order.
    pub edges: [Edge; 3],
}

/// Wire the corrections task and, when enabled, the Qn-vector analysis task into `graph`.
///
/// Outside a train this logs an error and returns [`Wiring::Skipped`] without loading
/// libraries or touching the graph. On error the graph is left unchanged.
#[instrument(level = "info", skip_all, fields(loader = loader.name()))]
pub fn wire_qn_tasks(
    graph: &mut TaskGraph,
    opts: &TrainOptions,
    loader: &dyn LibraryLoader,
    factory: &dyn TaskFactory,
) -> Result<Wiring, CoreError> {
    if !opts.train_scope {
        error!("this configuration shall not be used outside the lego train");
        return Ok(Wiring::Skipped);
    }

    loader::load_all(loader, WAGON_LIBS)?;

    // Built on a copy so a failed step leaves the caller's graph as it was.
    let mut staged = graph.clone();
    let correction = factory.add_correction_task(&mut staged, opts)?;
    info!(container = %correction, "corrections task attached");

    let analysis = if opts.run_qn_vector_analysis_task {
        Some(add_analysis_task(&mut staged, opts, factory, &correction)?)
    } else {
        None
    };
    *graph = staged;

    Ok(Wiring::Wired {
        correction,
        analysis,
    })
}

fn add_analysis_task(
    graph: &mut TaskGraph,
    opts: &TrainOptions,
    factory: &dyn TaskFactory,
    correction: &ContainerId,
) -> Result<AnalysisWiring, CoreError> {
    let mut spec = factory.analysis_task(opts.use_multiplicity, opts.run2_dataset);
    spec.set_param(PARAM_EXPECTED_PASS, opts.correction_pass.as_str());
    spec.set_param(PARAM_ALTERNATIVE_PASS, opts.alt_correction_pass.as_str());

    let task = graph.add_task(spec)?;
    let output = graph.create_container(ContainerSpec::output(
        ANALYSIS_QA_CONTAINER,
        "TList",
        ANALYSIS_QA_FILE,
    ))?;

    let common = graph.common_input().clone();
    let edges = [
        graph.connect_input(&task, 0, &common)?,
        graph.connect_input(&task, 1, correction)?,
        graph.connect_output(&task, 1, &output)?,
    ];
    info!(task = %task, output = %output, "analysis task attached");

    Ok(AnalysisWiring {
        task,
        output,
        edges,
    })
}

/// Load options from `config_path`, then run [`wire_qn_tasks`] with them.
pub fn wire_from_config_path(
    config_path: impl AsRef<Path>,
    graph: &mut TaskGraph,
    loader: &dyn LibraryLoader,
    factory: &dyn TaskFactory,
) -> Result<Wiring, CoreError> {
    let opts = options::load_options(config_path).inspect_err(|e| {
        error!(error = %e, "configuration options not loaded");
    })?;
    wire_qn_tasks(graph, &opts, loader, factory)
}
