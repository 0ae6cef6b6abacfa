//! In-memory tabular dataset handed to the cleaning pipeline.
//!
//! Cells are classified once at ingestion into [`Cell::Number`],
//! [`Cell::Text`], or [`Cell::Missing`] so the role predicates never have to
//! guess what a raw field was. Column order is the order of the source
//! header; row order is the order of the source records.

use std::{collections::HashSet, fmt};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("Duplicate column name '{0}'")]
    DuplicateColumn(String),
    #[error("Row {row} has {found} field(s) but the header defines {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

impl Cell {
    /// Classifies a raw field. Blank fields and NaN become `Missing`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(number) if number.is_nan() => Cell::Missing,
            Ok(number) => Cell::Number(number),
            Err(_) => Cell::Text(raw.to_string()),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// String form used for marker comparisons and log output.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Number(n) => format_number(*n),
            Cell::Text(s) => s.clone(),
            Cell::Missing => "nan".to_string(),
        }
    }

    /// Numeric reading of the cell: numbers as-is, text after trimming.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok(),
            Cell::Missing => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "'{s}'"),
            other => write!(f, "{}", other.as_text()),
        }
    }
}

pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    source: String,
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    pub fn new(
        source: impl Into<String>,
        headers: Vec<String>,
        rows: Vec<Vec<Cell>>,
    ) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(headers.len());
        for header in &headers {
            if !seen.insert(header.as_str()) {
                return Err(DatasetError::DuplicateColumn(header.clone()));
            }
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != headers.len() {
                return Err(DatasetError::RaggedRow {
                    row,
                    expected: headers.len(),
                    found: cells.len(),
                });
            }
        }
        Ok(Self {
            source: source.into(),
            headers,
            rows,
        })
    }

    /// Builds a dataset from raw string records, classifying every field.
    pub fn from_records<I, R, S>(
        source: impl Into<String>,
        headers: Vec<String>,
        records: I,
    ) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = records
            .into_iter()
            .map(|record| record.into_iter().map(|f| Cell::parse(f.as_ref())).collect())
            .collect();
        Self::new(source, headers, rows)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cells of one column in row order, or `None` for an unknown column.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Cell> + '_> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    pub fn push_constant_column(&mut self, name: &str, value: Cell) -> Result<(), DatasetError> {
        if self.column_index(name).is_some() {
            return Err(DatasetError::DuplicateColumn(name.to_string()));
        }
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(value.clone());
        }
        Ok(())
    }
}
