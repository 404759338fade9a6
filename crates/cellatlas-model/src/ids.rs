// SPDX-License-Identifier: Apache-2.0

use crate::error::ParseError;
use serde::{Deserialize, Serialize};

pub const ID_MAX_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct SiteId(String);

impl SiteId {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty("site_id"));
        }
        if input.trim() != input {
            return Err(ParseError::Trimmed("site_id"));
        }
        if input.len() > ID_MAX_LEN {
            return Err(ParseError::TooLong("site_id", ID_MAX_LEN));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct IncidentId(String);

impl IncidentId {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty("incident_id"));
        }
        if input.trim() != input {
            return Err(ParseError::Trimmed("incident_id"));
        }
        if input.len() > ID_MAX_LEN {
            return Err(ParseError::TooLong("incident_id", ID_MAX_LEN));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct MaintenanceId(String);

impl MaintenanceId {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty("maintenance_id"));
        }
        if input.trim() != input {
            return Err(ParseError::Trimmed("maintenance_id"));
        }
        if input.len() > ID_MAX_LEN {
            return Err(ParseError::TooLong("maintenance_id", ID_MAX_LEN));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct CaseId(String);

impl CaseId {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty("case_id"));
        }
        if input.trim() != input {
            return Err(ParseError::Trimmed("case_id"));
        }
        if input.len() > ID_MAX_LEN {
            return Err(ParseError::TooLong("case_id", ID_MAX_LEN));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
