use itertools::Itertools;
use thiserror::Error;

use crate::{
    dataset::{Cell, Dataset},
    predicates::{MissingMarkers, cell_is_acceptable},
    roles::Role,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    #[error("Column '{column}' for {role} is not present in the dataset")]
    UnknownColumn { role: Role, column: String },
}

/// Outcome of checking one role column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnValidation {
    pub role: Role,
    pub column: String,
    /// Row indices (0-based) and cells that neither meet the role nor are
    /// acceptable missing markers.
    pub offending: Vec<(usize, Cell)>,
}

impl ColumnValidation {
    pub fn is_valid(&self) -> bool {
        self.offending.is_empty()
    }

    pub fn offending_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.offending.iter().map(|(row, _)| *row)
    }

    /// `{row: value, ...}` rendering of the offending cells.
    pub fn describe_offending(&self) -> String {
        let body = self
            .offending
            .iter()
            .map(|(row, cell)| format!("{row}: {cell}"))
            .join(", ");
        format!("{{{body}}}")
    }
}

pub fn validate_column(
    dataset: &Dataset,
    role: Role,
    column: &str,
    markers: MissingMarkers,
) -> Result<ColumnValidation, ValidateError> {
    let cells = dataset
        .column(column)
        .ok_or_else(|| ValidateError::UnknownColumn {
            role,
            column: column.to_string(),
        })?;
    let offending = cells
        .enumerate()
        .filter(|(_, cell)| !cell_is_acceptable(role, cell, markers))
        .map(|(row, cell)| (row, cell.clone()))
        .collect();
    Ok(ColumnValidation {
        role,
        column: column.to_string(),
        offending,
    })
}
