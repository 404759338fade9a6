// SPDX-License-Identifier: Apache-2.0

use crate::error::{ParseError, ValidationError};
use crate::ids::CaseId;
use serde::{Deserialize, Serialize};

/// Coarse environment classification used to match historical cases.
/// `parse` accepts any ASCII case.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum LocationType {
    Urban,
    Industrial,
    Highway,
    Underground,
}

impl LocationType {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw.to_ascii_lowercase().as_str() {
            "urban" => Ok(Self::Urban),
            "industrial" => Ok(Self::Industrial),
            "highway" => Ok(Self::Highway),
            "underground" => Ok(Self::Underground),
            _ => Err(ParseError::UnknownValue("location type", raw.to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Urban => "urban",
            Self::Industrial => "industrial",
            Self::Highway => "highway",
            Self::Underground => "underground",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Product {
    pub product_name: String,
    pub category: String,
    pub description: String,
    pub use_cases: Vec<String>,
    pub benefits: Vec<String>,
    pub url: String,
}

impl Product {
    #[must_use]
    pub fn new(
        product_name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        use_cases: Vec<String>,
        benefits: Vec<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            category: category.into(),
            description: description.into(),
            use_cases,
            benefits,
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct ResolvedCase {
    pub case_id: CaseId,
    pub issue_description: String,
    pub root_cause: String,
    pub solution_applied: String,
    pub resolution_time_hours: f64,
    pub success_rate: f64,
    pub location_type: LocationType,
}

impl ResolvedCase {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        case_id: CaseId,
        issue_description: impl Into<String>,
        root_cause: impl Into<String>,
        solution_applied: impl Into<String>,
        resolution_time_hours: f64,
        success_rate: f64,
        location_type: LocationType,
    ) -> Self {
        Self {
            case_id,
            issue_description: issue_description.into(),
            root_cause: root_cause.into(),
            solution_applied: solution_applied.into(),
            resolution_time_hours,
            success_rate,
            location_type,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.success_rate) {
            return Err(ValidationError::OutOfRange(
                "case success_rate must be within 0.0..=1.0",
            ));
        }
        if self.resolution_time_hours < 0.0 {
            return Err(ValidationError::OutOfRange(
                "case resolution_time_hours must be >= 0",
            ));
        }
        Ok(())
    }
}
