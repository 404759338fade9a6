// SPDX-License-Identifier: Apache-2.0

use crate::error::ValidationError;
use crate::ids::{MaintenanceId, SiteId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct MaintenanceWindow {
    pub maintenance_id: MaintenanceId,
    pub sites: Vec<SiteId>,
    pub scheduled_start: DateTime<Utc>,
    pub scheduled_end: DateTime<Utc>,
    pub maintenance_type: String,
    pub impact: String,
    pub affected_services: Vec<String>,
    pub notification_sent: bool,
}

impl MaintenanceWindow {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        maintenance_id: MaintenanceId,
        sites: Vec<SiteId>,
        scheduled_start: DateTime<Utc>,
        scheduled_end: DateTime<Utc>,
        maintenance_type: impl Into<String>,
        impact: impl Into<String>,
        affected_services: Vec<String>,
        notification_sent: bool,
    ) -> Self {
        Self {
            maintenance_id,
            sites,
            scheduled_start,
            scheduled_end,
            maintenance_type: maintenance_type.into(),
            impact: impact.into(),
            affected_services,
            notification_sent,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.scheduled_start > self.scheduled_end {
            return Err(ValidationError::InvalidWindow(
                "maintenance scheduled_start must be <= scheduled_end",
            ));
        }
        Ok(())
    }

    /// A window is active when `now` falls inside its scheduled interval,
    /// bounds included.
    #[must_use]
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.scheduled_start <= now && now <= self.scheduled_end
    }
}
