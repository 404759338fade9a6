// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiError;
use cellatlas_model::{LocationType, Severity};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitesParams {
    pub location: String,
}

pub fn parse_sites_params(query: &BTreeMap<String, String>) -> Result<SitesParams, ApiError> {
    let location = query
        .get("location")
        .cloned()
        .ok_or_else(|| ApiError::missing_param("location"))?;
    if location.trim().is_empty() {
        return Err(ApiError::invalid_param("location", &location));
    }
    Ok(SitesParams { location })
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IncidentsParams {
    pub location: Option<String>,
    pub severity: Option<Severity>,
}

pub fn parse_incidents_params(
    query: &BTreeMap<String, String>,
) -> Result<IncidentsParams, ApiError> {
    let severity = match query.get("severity") {
        Some(raw) => {
            Some(Severity::parse(raw).map_err(|_| ApiError::invalid_param("severity", raw))?)
        }
        None => None,
    };
    Ok(IncidentsParams {
        location: query.get("location").cloned(),
        severity,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceParams {
    pub active_only: bool,
}

pub fn parse_maintenance_params(
    query: &BTreeMap<String, String>,
) -> Result<MaintenanceParams, ApiError> {
    let active_only = match query.get("active_only") {
        Some(raw) => parse_bool_flag(raw).ok_or_else(|| ApiError::invalid_param("active_only", raw))?,
        None => true,
    };
    Ok(MaintenanceParams { active_only })
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductsParams {
    pub category: Option<String>,
}

pub fn parse_products_params(query: &BTreeMap<String, String>) -> Result<ProductsParams, ApiError> {
    Ok(ProductsParams {
        category: query.get("category").cloned(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CasesParams {
    pub location_type: Option<LocationType>,
}

pub fn parse_cases_params(query: &BTreeMap<String, String>) -> Result<CasesParams, ApiError> {
    let location_type = match query.get("location_type") {
        Some(raw) => Some(
            LocationType::parse(raw).map_err(|_| ApiError::invalid_param("location_type", raw))?,
        ),
        None => None,
    };
    Ok(CasesParams { location_type })
}

fn parse_bool_flag(raw: &str) -> Option<bool> {
    if raw == "1" || raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw == "0" || raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
