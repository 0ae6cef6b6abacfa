//! Column resolution, validation, and cleaning composed into one run.

use itertools::Itertools;
use thiserror::Error;

use crate::{
    clean::{CleanedDataset, CleaningReport, clean},
    config::PipelineConfig,
    dataset::{Dataset, DatasetError},
    resolver::{ColumnResolution, ResolvedColumns, TypeSource, inject_default_type, resolve_columns},
    roles::Role,
    sink::PipelineLog,
    validate::{ColumnValidation, ValidateError, validate_column},
};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Missing required column(s): {}", .0.iter().join(", "))]
    UnresolvedColumns(Vec<Role>),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Validate(#[from] ValidateError),
}

#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub resolution: ColumnResolution,
    pub validations: Vec<ColumnValidation>,
    pub cleaned: CleanedDataset,
    pub report: CleaningReport,
}

impl PipelineOutcome {
    pub fn columns(&self) -> &ResolvedColumns {
        &self.cleaned.columns
    }
}

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the pipeline on a private copy of `input`.
    pub fn run(
        &self,
        input: &Dataset,
        log: &dyn PipelineLog,
    ) -> Result<PipelineOutcome, PipelineError> {
        log.info("===========================================");
        log.info(&format!("Processing a new dataset: {}", input.source()));

        let mut dataset = input.clone();
        let resolution = resolve_columns(&dataset);
        if resolution.kind == TypeSource::Default {
            inject_default_type(&mut dataset)?;
            log.warn(&format!(
                "No type column found; defaulting every row to '{}'.",
                crate::roles::DEFAULT_TYPE_VALUE
            ));
        }

        for role in Role::ALL {
            match resolution.column(role) {
                Some(column) => log.info(&format!("Using '{column}' as {role} column.")),
                None => log.error(&format!("No {role} column detected.")),
            }
        }

        let Some(columns) = resolution.resolved() else {
            let missing = resolution.missing_roles();
            log.error(&format!(
                "Failed to detect all necessary columns (missing: {}). Processing halted.",
                missing.iter().join(", ")
            ));
            return Err(PipelineError::UnresolvedColumns(missing));
        };

        let markers = self.config.missing_markers;
        let validations = Role::ALL
            .iter()
            .map(|role| validate_column(&dataset, *role, columns.get(*role), markers))
            .collect::<Result<Vec<_>, _>>()?;
        for validation in validations.iter().filter(|v| !v.is_valid()) {
            log.error(&format!(
                "Invalid data found in the {} column '{}': {}. {}",
                validation.role,
                validation.column,
                validation.describe_offending(),
                validation.role.expectation()
            ));
        }

        let (cleaned, report) = clean(&dataset, &columns, &validations, markers)?;
        log_dropped_rows(&dataset, &report, log);

        if cleaned.is_empty() {
            log.warn("No valid records remain after cleaning.");
        }
        log.info(&format!(
            "Kept {} of {} record(s) from {}.",
            report.kept,
            report.input_rows,
            input.source()
        ));

        Ok(PipelineOutcome {
            resolution,
            validations,
            cleaned,
            report,
        })
    }
}

fn log_dropped_rows(dataset: &Dataset, report: &CleaningReport, log: &dyn PipelineLog) {
    if !report.invalid_rows.is_empty() {
        log.warn(&format!(
            "Dropped {} record(s) with invalid values.",
            report.invalid_rows.len()
        ));
    }
    if report.missing_rows.is_empty() {
        return;
    }
    log.warn("Records with missing values detected:");
    for &row_idx in &report.missing_rows {
        let Some(row) = dataset.row(row_idx) else {
            continue;
        };
        let body = dataset
            .headers()
            .iter()
            .zip(row)
            .map(|(header, cell)| format!("'{header}': {cell}"))
            .join(", ");
        // +2: header line plus 1-based numbering
        log.warn(&format!("Row {}: {{{body}}}", row_idx + 2));
    }
}
