// SPDX-License-Identifier: Apache-2.0

use crate::error::ParseError;
use crate::ids::{IncidentId, SiteId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum IssueType {
    Coverage,
    Speed,
    Latency,
    Interference,
    Handover,
    CallDrop,
}

impl IssueType {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "coverage" => Ok(Self::Coverage),
            "speed" => Ok(Self::Speed),
            "latency" => Ok(Self::Latency),
            "interference" => Ok(Self::Interference),
            "handover" => Ok(Self::Handover),
            "call_drop" => Ok(Self::CallDrop),
            _ => Err(ParseError::UnknownValue("issue type", raw.to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coverage => "coverage",
            Self::Speed => "speed",
            Self::Latency => "latency",
            Self::Interference => "interference",
            Self::Handover => "handover",
            Self::CallDrop => "call_drop",
        }
    }
}

/// Incident severity. `parse` accepts any ASCII case, matching how the
/// query string arrives from callers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw.to_ascii_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParseError::UnknownValue("severity", raw.to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum IncidentStatus {
    Investigating,
    InProgress,
    Resolved,
}

impl IncidentStatus {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "investigating" => Ok(Self::Investigating),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            _ => Err(ParseError::UnknownValue("incident status", raw.to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Investigating => "investigating",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Incident {
    pub incident_id: IncidentId,
    pub issue_type: IssueType,
    pub affected_area: String,
    pub affected_sites: Vec<SiteId>,
    pub severity: Severity,
    pub start_time: DateTime<Utc>,
    pub estimated_resolution: Option<DateTime<Utc>>,
    pub status: IncidentStatus,
    pub description: String,
    pub affected_customers: u64,
}

impl Incident {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        incident_id: IncidentId,
        issue_type: IssueType,
        affected_area: impl Into<String>,
        affected_sites: Vec<SiteId>,
        severity: Severity,
        start_time: DateTime<Utc>,
        estimated_resolution: Option<DateTime<Utc>>,
        status: IncidentStatus,
        description: impl Into<String>,
        affected_customers: u64,
    ) -> Self {
        Self {
            incident_id,
            issue_type,
            affected_area: affected_area.into(),
            affected_sites,
            severity,
            start_time,
            estimated_resolution,
            status,
            description: description.into(),
            affected_customers,
        }
    }
}
