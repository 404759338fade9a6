// SPDX-License-Identifier: Apache-2.0

use cellatlas_catalog::NetworkCatalog;
use cellatlas_model::{
    CellSite, Incident, LocationType, MaintenanceWindow, Product, ResolvedCase, Severity,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteLookupError {
    UnknownLocation {
        location: String,
        known_keys: Vec<String>,
    },
}

impl Display for SiteLookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLocation {
                location,
                known_keys,
            } => write!(
                f,
                "no cell sites found for location: {location}; available: {}",
                known_keys.join(", ")
            ),
        }
    }
}

impl std::error::Error for SiteLookupError {}

/// Exact bucket lookup, case-insensitive. Unknown keys are the one place in
/// the query layer that errors instead of returning an empty list; the error
/// carries the full key list for caller guidance.
pub fn lookup_sites<'a>(
    catalog: &'a NetworkCatalog,
    location: &str,
) -> Result<&'a [CellSite], SiteLookupError> {
    catalog
        .sites_for_key(location)
        .ok_or_else(|| SiteLookupError::UnknownLocation {
            location: location.to_string(),
            known_keys: catalog.bucket_keys(),
        })
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct IncidentFilter {
    pub location: Option<String>,
    pub severity: Option<Severity>,
}

/// Applies the location substring filter and the severity equality filter.
/// Absent filters are no-ops; catalog order is preserved, so the two filters
/// commute.
pub fn filter_incidents<'a>(
    catalog: &'a NetworkCatalog,
    filter: &IncidentFilter,
) -> Vec<&'a Incident> {
    let location = filter.location.as_deref().map(str::to_lowercase);
    catalog
        .incidents()
        .iter()
        .filter(|inc| match &location {
            Some(needle) => inc.affected_area.to_lowercase().contains(needle),
            None => true,
        })
        .filter(|inc| match filter.severity {
            Some(severity) => inc.severity == severity,
            None => true,
        })
        .collect()
}

/// Maintenance windows, optionally restricted to those whose scheduled
/// interval contains `now`. The caller reads the wall clock exactly once per
/// request and passes it in, so one aggregation never observes two nows.
pub fn filter_maintenance(
    catalog: &NetworkCatalog,
    active_only: bool,
    now: DateTime<Utc>,
) -> Vec<&MaintenanceWindow> {
    catalog
        .maintenance()
        .iter()
        .filter(|w| !active_only || w.is_active_at(now))
        .collect()
}

/// Case-insensitive substring match on product category; absent filter
/// returns the whole table in order.
pub fn filter_products<'a>(
    catalog: &'a NetworkCatalog,
    category: Option<&str>,
) -> Vec<&'a Product> {
    let needle = category.map(str::to_lowercase);
    catalog
        .products()
        .iter()
        .filter(|p| match &needle {
            Some(needle) => p.category.to_lowercase().contains(needle),
            None => true,
        })
        .collect()
}

/// Resolved cases for an optional location type, sorted by success rate
/// descending. The sort is stable, so equal rates keep catalog order.
pub fn filter_cases(
    catalog: &NetworkCatalog,
    location_type: Option<LocationType>,
) -> Vec<&ResolvedCase> {
    let mut cases: Vec<&ResolvedCase> = catalog
        .cases()
        .iter()
        .filter(|c| match location_type {
            Some(lt) => c.location_type == lt,
            None => true,
        })
        .collect();
    cases.sort_by(|a, b| b.success_rate.total_cmp(&a.success_rate));
    cases
}
