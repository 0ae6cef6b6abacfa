use std::fmt;

use serde::Serialize;

pub const LATITUDE_ALIASES: &[&str] = &["lat", "Lat", "Latitude", "latitude"];
pub const LONGITUDE_ALIASES: &[&str] = &["lon", "Lon", "long", "Long", "Longitude", "longitude"];
pub const VOLUME_ALIASES: &[&str] = &["volume", "Volume", "vol", "Vol"];
pub const TYPE_ALIASES: &[&str] = &["type", "Type"];

/// Name of the column injected when no type alias is present.
pub const DEFAULT_TYPE_COLUMN: &str = "type";
pub const DEFAULT_TYPE_VALUE: &str = "demand";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Latitude,
    Longitude,
    Volume,
    Type,
}

impl Role {
    /// All roles in cleaned-output column order.
    pub const ALL: [Role; 4] = [Role::Latitude, Role::Longitude, Role::Volume, Role::Type];

    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Role::Latitude => LATITUDE_ALIASES,
            Role::Longitude => LONGITUDE_ALIASES,
            Role::Volume => VOLUME_ALIASES,
            Role::Type => TYPE_ALIASES,
        }
    }

    pub fn matches(self, header: &str) -> bool {
        self.aliases().contains(&header)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Latitude => "latitude",
            Role::Longitude => "longitude",
            Role::Volume => "volume",
            Role::Type => "type",
        }
    }

    pub(crate) fn expectation(self) -> &'static str {
        match self {
            Role::Latitude => "Valid entries are between -90 and 90.",
            Role::Longitude => "Valid entries are between -180 and 180.",
            Role::Volume => "Valid entries are non-negative numbers.",
            Role::Type => "Valid entries are 'supply' and 'demand'.",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
