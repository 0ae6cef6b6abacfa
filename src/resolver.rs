//! Header alias matching for the four column roles.
//!
//! Resolution is a pure scan over the header list: for each role the first
//! header (in column order) that exactly matches one of the role's aliases
//! wins. A missing type column is not an error; callers inject the default
//! column with [`inject_default_type`].

use serde::Serialize;

use crate::{
    dataset::{Cell, Dataset, DatasetError},
    roles::{DEFAULT_TYPE_COLUMN, DEFAULT_TYPE_VALUE, Role},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeSource {
    Column(String),
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnResolution {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub volume: Option<String>,
    #[serde(rename = "type")]
    pub kind: TypeSource,
}

/// Column names for all four roles once resolution succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedColumns {
    pub latitude: String,
    pub longitude: String,
    pub volume: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ResolvedColumns {
    pub fn get(&self, role: Role) -> &str {
        match role {
            Role::Latitude => &self.latitude,
            Role::Longitude => &self.longitude,
            Role::Volume => &self.volume,
            Role::Type => &self.kind,
        }
    }

    /// Header names in cleaned-output order.
    pub fn headers(&self) -> Vec<String> {
        Role::ALL.iter().map(|r| self.get(*r).to_string()).collect()
    }
}

impl ColumnResolution {
    pub fn column(&self, role: Role) -> Option<&str> {
        match role {
            Role::Latitude => self.latitude.as_deref(),
            Role::Longitude => self.longitude.as_deref(),
            Role::Volume => self.volume.as_deref(),
            Role::Type => Some(match &self.kind {
                TypeSource::Column(name) => name.as_str(),
                TypeSource::Default => DEFAULT_TYPE_COLUMN,
            }),
        }
    }

    pub fn missing_roles(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| self.column(*role).is_none())
            .collect()
    }

    pub fn resolved(&self) -> Option<ResolvedColumns> {
        Some(ResolvedColumns {
            latitude: self.latitude.clone()?,
            longitude: self.longitude.clone()?,
            volume: self.volume.clone()?,
            kind: self.column(Role::Type)?.to_string(),
        })
    }
}

pub fn resolve_columns(dataset: &Dataset) -> ColumnResolution {
    let first = |role: Role| {
        dataset
            .headers()
            .iter()
            .find(|header| role.matches(header))
            .cloned()
    };
    ColumnResolution {
        latitude: first(Role::Latitude),
        longitude: first(Role::Longitude),
        volume: first(Role::Volume),
        kind: first(Role::Type).map_or(TypeSource::Default, TypeSource::Column),
    }
}

pub fn inject_default_type(dataset: &mut Dataset) -> Result<(), DatasetError> {
    dataset.push_constant_column(DEFAULT_TYPE_COLUMN, Cell::text(DEFAULT_TYPE_VALUE))
}
