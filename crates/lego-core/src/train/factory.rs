use lego_model::{ContainerId, ContainerSpec, TaskSpec, TrainOptions};

use crate::{error::CoreError, graph::TaskGraph};

/// Builds the tasks of the Qn-vector wagon.
pub trait TaskFactory {
    /// Register the corrections task with its own containers and edges.
    ///
    /// Returns the container the corrected Qn vectors are published in.
    fn add_correction_task(
        &self,
        graph: &mut TaskGraph,
        opts: &TrainOptions,
    ) -> Result<ContainerId, CoreError>;

    /// Build (but do not register) the Qn-vector analysis task.
    fn analysis_task(&self, use_multiplicity: bool, run2_dataset: bool) -> TaskSpec;
}

/// Default tasks of the PWGJE Qn-vector wagon.
#[derive(Debug, Clone, Copy, Default)]
pub struct QnTaskFactory;

impl QnTaskFactory {
    pub const CORRECTION_TASK: &'static str = "FlowQnVectorCorrections";
    pub const CORRECTION_CLASS: &'static str = "AliAnalysisTaskFlowVectorCorrectionsPWGJE";
    pub const ANALYSIS_TASK: &'static str = "QnVectorAnalysis";
    pub const ANALYSIS_CLASS: &'static str = "AliAnalysisTaskQnVectorAnalysis";

    pub const QVECTOR_CONTAINER: &'static str = "CalibratedQvector";
    pub const HISTOGRAMS_CONTAINER: &'static str = "CorrectionHistograms";
    pub const QA_CONTAINER: &'static str = "CorrectionQAHistograms";
}

impl TaskFactory for QnTaskFactory {
    fn add_correction_task(
        &self,
        graph: &mut TaskGraph,
        opts: &TrainOptions,
    ) -> Result<ContainerId, CoreError> {
        let spec = TaskSpec::new(Self::CORRECTION_TASK, Self::CORRECTION_CLASS)
            .with_param("useMultiplicity", opts.use_multiplicity.to_string())
            .with_param("run2DataSet", opts.run2_dataset.to_string());
        let task = graph.add_task(spec)?;

        let qvector =
            graph.create_container(ContainerSpec::exchange(Self::QVECTOR_CONTAINER, "TList"))?;
        let histograms = graph.create_container(ContainerSpec::output(
            Self::HISTOGRAMS_CONTAINER,
            "TList",
            "CalibrationHistograms.root",
        ))?;
        let qa = graph.create_container(ContainerSpec::output(
            Self::QA_CONTAINER,
            "TList",
            "CalibrationQA.root",
        ))?;

        let common = graph.common_input().clone();
        graph.connect_input(&task, 0, &common)?;
        graph.connect_output(&task, 1, &qvector)?;
        graph.connect_output(&task, 2, &histograms)?;
        graph.connect_output(&task, 3, &qa)?;

        Ok(qvector)
    }

    fn analysis_task(&self, use_multiplicity: bool, run2_dataset: bool) -> TaskSpec {
        TaskSpec::new(Self::ANALYSIS_TASK, Self::ANALYSIS_CLASS)
            .with_param("useMultiplicity", use_multiplicity.to_string())
            .with_param("run2DataSet", run2_dataset.to_string())
    }
}

#[cfg(test)]
mod tests {
    use lego_model::ContainerKind;

    use super::*;

    #[test]
    fn correction_task_publishes_exchange_container() {
        let mut graph = TaskGraph::new();
        let out = QnTaskFactory
            .add_correction_task(&mut graph, &TrainOptions::default())
            .unwrap();

        assert_eq!(out.as_str(), QnTaskFactory::QVECTOR_CONTAINER);
        assert_eq!(graph.container(&out).unwrap().kind, ContainerKind::Exchange);
        assert_eq!(graph.tasks().len(), 1);
        assert_eq!(graph.edges().len(), 4);
    }

    #[test]
    fn analysis_task_carries_flags() {
        let spec = QnTaskFactory.analysis_task(true, false);
        assert_eq!(spec.name.as_str(), QnTaskFactory::ANALYSIS_TASK);
        assert_eq!(spec.param("useMultiplicity"), Some("true"));
        assert_eq!(spec.param("run2DataSet"), Some("false"));
    }
}
