pub mod clean;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod detect;
pub mod io_utils;
pub mod pipeline;
pub mod points;
pub mod predicates;
pub mod process;
pub mod resolver;
pub mod roles;
pub mod sink;
pub mod table;
pub mod validate;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::cli::{Cli, Commands};

pub use crate::{
    clean::{CleanedDataset, CleaningReport, PointKind, SupplyPoint},
    dataset::{Cell, Dataset},
    pipeline::{Pipeline, PipelineError, PipelineOutcome},
    roles::Role,
    sink::{LogFacade, MemoryLog, PipelineLog},
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("supply_map", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Process(args) => process::execute(&args),
        Commands::Detect(args) => detect::execute(&args),
        Commands::Points(args) => points::execute(&args),
    }
}

pub(crate) fn printable_delimiter(delimiter: u8) -> String {
    match delimiter {
        b',' => ",".to_string(),
        b'\t' => "\\t".to_string(),
        other => (other as char).to_string(),
    }
}
