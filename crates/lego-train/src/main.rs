use std::path::PathBuf;

use anyhow::{Context, bail};
use tracing::info;

use lego_core::{
    LibraryLoader, QnTaskFactory, SearchPathLoader, StaticLoader, TaskGraph, Wiring,
    configure_grid_job, wire_from_config_path,
};
use lego_observe::{LoggerConfig, init_logger};

const USAGE: &str = "usage: lego-train grid [--par] | lego-train wire <config-path>";
const LIBRARY_PATH_VAR: &str = "LD_LIBRARY_PATH";
const DRY_RUN_VAR: &str = "LEGO_DRY_RUN";

enum Command {
    Grid { use_par_files: bool },
    Wire { config_path: PathBuf },
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Command> {
    match args.next().as_deref() {
        Some("grid") => match args.next().as_deref() {
            None => Ok(Command::Grid { use_par_files: false }),
            Some("--par") => Ok(Command::Grid { use_par_files: true }),
            Some(other) => bail!("unexpected argument {other:?}\n{USAGE}"),
        },
        Some("wire") => {
            let path = args.next().unwrap_or_else(|| ".".to_string());
            Ok(Command::Wire {
                config_path: PathBuf::from(path),
            })
        }
        _ => bail!(USAGE),
    }
}

fn main() -> anyhow::Result<()> {
    let cfg = LoggerConfig::from_env()?;
    init_logger(&cfg)?;

    match parse_args(std::env::args().skip(1))? {
        Command::Grid { use_par_files } => {
            let job = configure_grid_job(use_par_files);
            info!(jdl = %job.jdl_name, runs = job.runs.len(), "grid job ready");
            println!("{}", serde_json::to_string_pretty(&job)?);
        }
        Command::Wire { config_path } => {
            let dry_run = std::env::var_os(DRY_RUN_VAR).is_some_and(|v| v == "1");
            let loader: Box<dyn LibraryLoader> = if dry_run {
                Box::new(StaticLoader::permissive())
            } else {
                Box::new(SearchPathLoader::from_env(LIBRARY_PATH_VAR))
            };

            let mut graph = TaskGraph::new();
            let wiring =
                wire_from_config_path(&config_path, &mut graph, loader.as_ref(), &QnTaskFactory)
                    .with_context(|| format!("wiring from {}", config_path.display()))?;

            if let Wiring::Wired { analysis, .. } = &wiring {
                info!(
                    tasks = graph.tasks().len(),
                    containers = graph.containers().len(),
                    analysis = analysis.is_some(),
                    "train graph wired"
                );
            }
            println!("{}", serde_json::to_string_pretty(&graph.snapshot())?);
        }
    }
    Ok(())
}
