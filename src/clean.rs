//! Row-level elision of invalid and missing records.
//!
//! A row is dropped when any role column flagged it as invalid, or when any
//! of its cells (in any column) is an acceptable missing marker. Everything
//! else is kept in its original relative order and converted into a typed
//! [`SupplyPoint`].

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    dataset::{Cell, Dataset},
    predicates::{MissingMarkers, normalized_type},
    resolver::ResolvedColumns,
    roles::Role,
    validate::{ColumnValidation, ValidateError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    Supply,
    Demand,
}

impl PointKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PointKind::Supply => "supply",
            PointKind::Demand => "demand",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplyPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub volume: f64,
    #[serde(rename = "type")]
    pub kind: PointKind,
}

impl SupplyPoint {
    /// Display radius for map markers; grows with `ln(1 + volume)`.
    pub fn marker_radius(&self) -> f64 {
        self.volume.ln_1p()
    }

    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.latitude.to_string(),
            self.longitude.to_string(),
            self.volume.to_string(),
            self.kind.as_str().to_string(),
        ]
    }
}

/// Cleaned table restricted to latitude, longitude, volume, type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanedDataset {
    pub columns: ResolvedColumns,
    points: Vec<SupplyPoint>,
}

impl CleanedDataset {
    pub fn headers(&self) -> Vec<String> {
        self.columns.headers()
    }

    pub fn points(&self) -> &[SupplyPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.points.iter().map(SupplyPoint::to_record)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CleaningReport {
    pub input_rows: usize,
    pub invalid_rows: Vec<usize>,
    pub missing_rows: Vec<usize>,
    pub kept: usize,
}

impl CleaningReport {
    pub fn dropped(&self) -> usize {
        self.input_rows - self.kept
    }
}

pub fn clean(
    dataset: &Dataset,
    columns: &ResolvedColumns,
    validations: &[ColumnValidation],
    markers: MissingMarkers,
) -> Result<(CleanedDataset, CleaningReport), ValidateError> {
    let mut indices = [0usize; 4];
    for (slot, role) in indices.iter_mut().zip(Role::ALL) {
        let name = columns.get(role);
        *slot = dataset
            .column_index(name)
            .ok_or_else(|| ValidateError::UnknownColumn {
                role,
                column: name.to_string(),
            })?;
    }

    let invalid: BTreeSet<usize> = validations
        .iter()
        .flat_map(|v| v.offending_rows())
        .collect();

    let mut report = CleaningReport {
        input_rows: dataset.len(),
        invalid_rows: invalid.iter().copied().collect(),
        ..CleaningReport::default()
    };
    let mut points = Vec::with_capacity(dataset.len());

    for (row_idx, row) in dataset.rows().iter().enumerate() {
        if invalid.contains(&row_idx) {
            continue;
        }
        if row.iter().any(|cell| markers.is_permissible_missing(cell)) {
            report.missing_rows.push(row_idx);
            continue;
        }
        match to_point(row, &indices) {
            Some(point) => points.push(point),
            None => report.invalid_rows.push(row_idx),
        }
    }
    report.invalid_rows.sort_unstable();
    report.kept = points.len();

    Ok((
        CleanedDataset {
            columns: columns.clone(),
            points,
        },
        report,
    ))
}

fn to_point(row: &[Cell], indices: &[usize; 4]) -> Option<SupplyPoint> {
    let [lat, lon, vol, kind] = *indices;
    let kind = match normalized_type(&row[kind])? {
        "supply" => PointKind::Supply,
        _ => PointKind::Demand,
    };
    Some(SupplyPoint {
        latitude: row[lat].as_f64()?,
        longitude: row[lon].as_f64()?,
        volume: row[vol].as_f64()?,
        kind,
    })
}
