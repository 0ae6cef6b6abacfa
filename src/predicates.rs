use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{dataset::Cell, roles::Role};

/// Which string markers count as an acceptable missing value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum MissingMarkers {
    /// Empty, `na`, `nan`
    #[default]
    Standard,
    /// Standard markers plus `n/a`
    Extended,
}

impl MissingMarkers {
    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            MissingMarkers::Standard => &["", "na", "nan"],
            MissingMarkers::Extended => &["", "na", "nan", "n/a"],
        }
    }

    pub fn is_permissible_missing(self, cell: &Cell) -> bool {
        match cell {
            Cell::Missing => true,
            Cell::Number(n) => n.is_nan(),
            Cell::Text(s) => {
                let lowered = s.trim().to_lowercase();
                self.tokens().contains(&lowered.as_str())
            }
        }
    }
}

fn numeric_in(cell: &Cell, min: f64, max: f64) -> bool {
    cell.as_f64().is_some_and(|v| (min..=max).contains(&v))
}

pub fn is_valid_latitude(cell: &Cell) -> bool {
    numeric_in(cell, -90.0, 90.0)
}

pub fn is_valid_longitude(cell: &Cell) -> bool {
    numeric_in(cell, -180.0, 180.0)
}

pub fn is_valid_volume(cell: &Cell) -> bool {
    cell.as_f64().is_some_and(|v| v >= 0.0)
}

pub fn is_valid_type(cell: &Cell) -> bool {
    normalized_type(cell).is_some()
}

/// Lowercased `supply`/`demand` for a valid type cell.
pub fn normalized_type(cell: &Cell) -> Option<&'static str> {
    let Cell::Text(s) = cell else {
        return None;
    };
    match s.trim().to_lowercase().as_str() {
        "supply" => Some("supply"),
        "demand" => Some("demand"),
        _ => None,
    }
}

pub fn satisfies_role(role: Role, cell: &Cell) -> bool {
    match role {
        Role::Latitude => is_valid_latitude(cell),
        Role::Longitude => is_valid_longitude(cell),
        Role::Volume => is_valid_volume(cell),
        Role::Type => is_valid_type(cell),
    }
}

/// A cell passes column validation when it meets its role or is an
/// acceptable missing marker.
pub fn cell_is_acceptable(role: Role, cell: &Cell, markers: MissingMarkers) -> bool {
    satisfies_role(role, cell) || markers.is_permissible_missing(cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_ranges_are_inclusive() {
        assert!(is_valid_latitude(&Cell::Number(90.0)));
        assert!(is_valid_latitude(&Cell::Number(-90.0)));
        assert!(!is_valid_latitude(&Cell::Number(1000.0)));
        assert!(is_valid_longitude(&Cell::Number(-180.0)));
        assert!(!is_valid_longitude(&Cell::Number(-190.0)));
        assert!(is_valid_latitude(&Cell::text(" 45.5 ")));
        assert!(!is_valid_latitude(&Cell::text("north")));
        assert!(!is_valid_latitude(&Cell::Missing));
    }

    #[test]
    fn volume_must_be_non_negative() {
        assert!(is_valid_volume(&Cell::Number(0.0)));
        assert!(!is_valid_volume(&Cell::Number(-1.0)));
        assert!(!is_valid_volume(&Cell::text("INVALID")));
    }

    #[test]
    fn type_is_case_insensitive() {
        assert_eq!(normalized_type(&Cell::text(" SUPPLY ")), Some("supply"));
        assert_eq!(normalized_type(&Cell::text("Demand")), Some("demand"));
        assert!(!is_valid_type(&Cell::text("INVALID")));
        assert!(!is_valid_type(&Cell::Number(1.0)));
    }

    #[test]
    fn marker_sets_differ_only_on_slash_na() {
        let slash = Cell::text("N/A");
        assert!(!MissingMarkers::Standard.is_permissible_missing(&slash));
        assert!(MissingMarkers::Extended.is_permissible_missing(&slash));
        for cell in [Cell::Missing, Cell::text(" NA "), Cell::text("NaN"), Cell::text("")] {
            assert!(MissingMarkers::Standard.is_permissible_missing(&cell));
        }
        assert!(!MissingMarkers::Standard.is_permissible_missing(&Cell::text("None")));
    }

    #[test]
    fn acceptable_combines_role_and_markers() {
        let markers = MissingMarkers::Standard;
        assert!(cell_is_acceptable(Role::Type, &Cell::text("na"), markers));
        assert!(cell_is_acceptable(Role::Latitude, &Cell::Missing, markers));
        assert!(!cell_is_acceptable(Role::Longitude, &Cell::text("INVALID"), markers));
    }
}
