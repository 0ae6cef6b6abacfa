use std::io::Write;

use anyhow::{Context, Result, anyhow};
use log::info;

use crate::{
    cli::{InputArgs, PipelineArgs, ProcessArgs},
    config::PipelineConfig,
    dataset::Dataset,
    io_utils,
    pipeline::{Pipeline, PipelineOutcome},
    sink::{LogFacade, MemoryLog, Tee},
    table,
};

pub const FAILURE_MESSAGE: &str =
    "The dataset couldn't be processed correctly. Please check the logs for more details.";

pub fn execute(args: &ProcessArgs) -> Result<()> {
    let config = load_config(&args.pipeline)?.with_overrides(None, args.rows);
    let dataset = load_input(&args.input)?;
    let outcome = run_pipeline(&dataset, config.clone(), args.pipeline.show_log)?;

    if args.table {
        let rows = outcome
            .cleaned
            .records()
            .take(config.preview_rows)
            .collect::<Vec<_>>();
        table::print_table(&outcome.cleaned.headers(), &rows);
    } else {
        let delimiter = args.input.delimiter.unwrap_or(io_utils::DEFAULT_CSV_DELIMITER);
        let writer = io_utils::open_output(args.output.as_deref())?;
        io_utils::write_cleaned(writer, &outcome.cleaned, delimiter)?;
    }
    info!(
        "Wrote {} cleaned record(s) ({} dropped)",
        outcome.report.kept,
        outcome.report.dropped()
    );
    Ok(())
}

pub(crate) fn load_config(args: &PipelineArgs) -> Result<PipelineConfig> {
    let base = match &args.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    Ok(base.with_overrides(args.missing_markers, None))
}

pub(crate) fn load_input(args: &InputArgs) -> Result<Dataset> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    info!(
        "Reading '{}' with delimiter '{}'",
        args.input.display(),
        crate::printable_delimiter(delimiter)
    );
    io_utils::read_dataset(&args.input, delimiter, encoding)
        .with_context(|| format!("Loading dataset from {:?}", args.input))
}

/// Runs the pipeline with the log facade, optionally echoing the collected
/// log to stderr. Pipeline failures become a single user-facing message.
pub(crate) fn run_pipeline(
    dataset: &Dataset,
    config: PipelineConfig,
    show_log: bool,
) -> Result<PipelineOutcome> {
    let memory = MemoryLog::new();
    let facade = LogFacade;
    let sink = Tee::new(&facade, &memory);
    let result = Pipeline::new(config).run(dataset, &sink);

    if show_log {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "{}", memory.render())?;
    }
    result.map_err(|err| anyhow!("{FAILURE_MESSAGE} ({err})"))
}
