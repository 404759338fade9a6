// SPDX-License-Identifier: Apache-2.0

use crate::error::ParseError;
use crate::ids::SiteId;
use serde::{Deserialize, Serialize};

/// Radio technology deployed on a site, keyed by its commercial label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum NetworkTechnology {
    #[serde(rename = "4G")]
    Lte,
    #[serde(rename = "5G NSA")]
    FiveGNsa,
    #[serde(rename = "5G SA")]
    FiveGSa,
    #[serde(rename = "VoLTE")]
    Volte,
}

impl NetworkTechnology {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "4G" => Ok(Self::Lte),
            "5G NSA" => Ok(Self::FiveGNsa),
            "5G SA" => Ok(Self::FiveGSa),
            "VoLTE" => Ok(Self::Volte),
            _ => Err(ParseError::UnknownValue(
                "network technology",
                raw.to_string(),
            )),
        }
    }

    #[must_use]
    pub const fn as_label(self) -> &'static str {
        match self {
            Self::Lte => "4G",
            Self::FiveGNsa => "5G NSA",
            Self::FiveGSa => "5G SA",
            Self::Volte => "VoLTE",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum SiteStatus {
    Active,
    Maintenance,
    Degraded,
}

impl SiteStatus {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "active" => Ok(Self::Active),
            "maintenance" => Ok(Self::Maintenance),
            "degraded" => Ok(Self::Degraded),
            _ => Err(ParseError::UnknownValue("site status", raw.to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Maintenance => "maintenance",
            Self::Degraded => "degraded",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct CellSite {
    pub site_id: SiteId,
    pub site_name: String,
    pub location: String,
    pub technologies: Vec<NetworkTechnology>,
    pub sectors: u32,
    pub status: SiteStatus,
    pub coverage_radius_km: f64,
    pub coordinates: Coordinates,
}

impl CellSite {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        site_id: SiteId,
        site_name: impl Into<String>,
        location: impl Into<String>,
        technologies: Vec<NetworkTechnology>,
        sectors: u32,
        status: SiteStatus,
        coverage_radius_km: f64,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            site_id,
            site_name: site_name.into(),
            location: location.into(),
            technologies,
            sectors,
            status,
            coverage_radius_km,
            coordinates,
        }
    }
}
