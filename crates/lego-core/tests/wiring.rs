use lego_core::{
    CoreError, QnTaskFactory, StaticLoader, TaskFactory, TaskGraph, Wiring, configure_grid_job,
    grid::RUNS, train::WAGON_LIBS, wire_qn_tasks,
};
use lego_core::{GraphError, train::ANALYSIS_QA_CONTAINER};
use lego_model::{ContainerId, ContainerSpec, Direction, LibraryMode, TaskSpec, TrainOptions};

/// Registers a bare corrections task and publishes through the common input,
/// so every container and edge in the graph comes from the wiring step itself.
struct BareFactory;

impl TaskFactory for BareFactory {
    fn add_correction_task(
        &self,
        graph: &mut TaskGraph,
        _opts: &TrainOptions,
    ) -> Result<ContainerId, CoreError> {
        graph.add_task(TaskSpec::new("corrections", "Corrections"))?;
        Ok(graph.common_input().clone())
    }

    fn analysis_task(&self, _use_multiplicity: bool, _run2_dataset: bool) -> TaskSpec {
        TaskSpec::new("analysis", "Analysis")
    }
}

fn opts(train_scope: bool, analysis: bool) -> TrainOptions {
    TrainOptions {
        train_scope,
        run_qn_vector_analysis_task: analysis,
        ..Default::default()
    }
}

#[test]
fn library_lists_differ_only_in_flow_libraries() {
    let shared = configure_grid_job(false);
    let packaged = configure_grid_job(true);

    assert_eq!(shared.library_mode(), LibraryMode::Shared);
    assert_eq!(packaged.library_mode(), LibraryMode::Packaged);
    assert_eq!(
        shared.additional_libs.joined(),
        "libGui.so libProof.so libMinuit.so libXMLParser.so \
         libRAWDatabase.so libRAWDatarec.so libCDB.so libSTEERBase.so \
         libSTEER.so libTPCbase.so libTOFbase.so libTOFrec.so \
         libTRDbase.so libVZERObase.so libVZEROrec.so libT0base.so \
         libT0rec.so libTender.so libTenderSupplies.so \
         libPWGflowBase.so libPWGflowTasks.so"
    );
    assert_eq!(
        packaged.additional_libs.joined(),
        "libGui.so libProof.so libMinuit.so libXMLParser.so \
         libRAWDatabase.so libRAWDatarec.so libCDB.so libSTEERBase.so \
         libSTEER.so libTPCbase.so libTOFbase.so libTOFrec.so \
         libTRDbase.so libVZERObase.so libVZEROrec.so libT0base.so \
         libT0rec.so libTender.so libTenderSupplies.so"
    );

    let mut aligned = packaged.clone();
    aligned.additional_libs = shared.additional_libs.clone();
    aligned.packages = shared.packages.clone();
    assert_eq!(aligned, shared);
}

#[test]
fn run_list_is_fixed() {
    for flag in [false, true] {
        let cfg = configure_grid_job(flag);
        assert_eq!(cfg.runs.len(), 3);
        assert_eq!(cfg.runs.as_slice(), &[246994, 246991, 246989]);
        assert_eq!(cfg.runs.as_slice(), &RUNS);
    }
}

#[test]
fn outside_train_graph_is_untouched() {
    let mut graph = TaskGraph::new();
    let loader = StaticLoader::permissive();

    let wiring = wire_qn_tasks(&mut graph, &opts(false, true), &loader, &BareFactory).unwrap();

    assert_eq!(wiring, Wiring::Skipped);
    assert!(graph.tasks().is_empty());
    assert_eq!(graph.containers().len(), 1);
    assert!(graph.edges().is_empty());
    assert!(loader.loaded().is_empty());
}

#[test]
fn corrections_only_registers_one_task() {
    let mut graph = TaskGraph::new();
    let loader = StaticLoader::permissive();

    let wiring = wire_qn_tasks(&mut graph, &opts(true, false), &loader, &BareFactory).unwrap();

    assert!(matches!(wiring, Wiring::Wired { analysis: None, .. }));
    assert_eq!(graph.tasks().len(), 1);
    assert_eq!(graph.containers().len(), 1);
    assert!(graph.edges().is_empty());
    assert_eq!(loader.loaded(), WAGON_LIBS.to_vec());
}

#[test]
fn analysis_adds_one_task_one_container_three_edges() {
    let mut graph = TaskGraph::new();
    let loader = StaticLoader::permissive();

    let wiring = wire_qn_tasks(&mut graph, &opts(true, true), &loader, &BareFactory).unwrap();

    let Wiring::Wired {
        analysis: Some(analysis),
        ..
    } = wiring
    else {
        panic!("analysis task expected");
    };
    assert_eq!(graph.tasks().len(), 2);
    assert_eq!(graph.containers().len(), 2);
    assert_eq!(graph.edges().len(), 3);

    let slots: Vec<_> = graph.edges().iter().map(|e| (e.direction, e.slot)).collect();
    assert_eq!(
        slots,
        vec![
            (Direction::Input, 0),
            (Direction::Input, 1),
            (Direction::Output, 1)
        ]
    );
    assert!(graph.edges().iter().all(|e| e.task == analysis.task));
}

#[test]
fn analysis_step_delta_with_default_factory() {
    let mut base = TaskGraph::new();
    let loader = StaticLoader::permissive();
    wire_qn_tasks(&mut base, &opts(true, false), &loader, &QnTaskFactory).unwrap();

    let mut full = TaskGraph::new();
    wire_qn_tasks(&mut full, &opts(true, true), &loader, &QnTaskFactory).unwrap();

    assert_eq!(full.tasks().len() - base.tasks().len(), 1);
    assert_eq!(full.containers().len() - base.containers().len(), 1);
    assert_eq!(full.edges().len() - base.edges().len(), 3);
}

#[test]
fn failed_wiring_keeps_caller_graph() {
    let mut graph = TaskGraph::new();
    graph
        .create_container(ContainerSpec::output(ANALYSIS_QA_CONTAINER, "TList", "qa.root"))
        .unwrap();
    let before = graph.snapshot();
    let loader = StaticLoader::permissive();

    let err = wire_qn_tasks(&mut graph, &opts(true, true), &loader, &QnTaskFactory).unwrap_err();

    assert!(matches!(err, CoreError::Graph(GraphError::DuplicateContainer(_))));
    assert_eq!(graph.snapshot(), before);
    assert!(graph.tasks().is_empty());
    assert!(graph.edges().is_empty());
}
