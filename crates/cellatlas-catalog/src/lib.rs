#![forbid(unsafe_code)]
//! The static data catalog: five read-only tables keyed by location or
//! category, loaded once at process start and shared for the process
//! lifetime. There is no mutation API.

use cellatlas_model::{
    CellSite, Incident, MaintenanceWindow, ParseError, Product, ResolvedCase, SiteId,
    ValidationError,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

mod fixtures;

pub const CRATE_NAME: &str = "cellatlas-catalog";

/// Product table indices referenced by the diagnostic recommendation rules.
/// The fixture order is load-bearing; `validate` checks the indices exist.
pub const PRODUCT_ANOMALY_DETECTION: usize = 0;
pub const PRODUCT_GEOLOCATION: usize = 1;
pub const PRODUCT_TELCO_FABRIC: usize = 2;
pub const PRODUCT_INTERFERENCE_DETECTION: usize = 3;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CatalogError {
    Parse(ParseError),
    Validation(ValidationError),
    DuplicateBucketKey(String),
    NonLowercaseBucketKey(String),
    DuplicateSiteId(String),
    EmptyTable(&'static str),
    MissingProductIndex(usize),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "catalog fixture parse failed: {e}"),
            Self::Validation(e) => write!(f, "catalog record invalid: {e}"),
            Self::DuplicateBucketKey(key) => write!(f, "duplicate bucket key: {key}"),
            Self::NonLowercaseBucketKey(key) => {
                write!(f, "bucket key must be lowercase: {key}")
            }
            Self::DuplicateSiteId(id) => {
                write!(f, "site {id} appears in more than one location bucket")
            }
            Self::EmptyTable(name) => write!(f, "catalog table {name} must not be empty"),
            Self::MissingProductIndex(idx) => {
                write!(f, "product table missing referenced index {idx}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<ParseError> for CatalogError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<ValidationError> for CatalogError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

/// A named group of cell sites under one lowercase location key.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteBucket {
    pub key: String,
    pub sites: Vec<CellSite>,
}

impl SiteBucket {
    #[must_use]
    pub fn new(key: impl Into<String>, sites: Vec<CellSite>) -> Self {
        Self {
            key: key.into(),
            sites,
        }
    }
}

/// All five tables. Bucket, incident, product and case order is the fixture
/// insertion order and is observable through the API, so accessors never
/// resort.
#[derive(Debug, Clone)]
pub struct NetworkCatalog {
    buckets: Vec<SiteBucket>,
    incidents: Vec<Incident>,
    maintenance: Vec<MaintenanceWindow>,
    products: Vec<Product>,
    cases: Vec<ResolvedCase>,
}

impl NetworkCatalog {
    #[must_use]
    pub fn new(
        buckets: Vec<SiteBucket>,
        incidents: Vec<Incident>,
        maintenance: Vec<MaintenanceWindow>,
        products: Vec<Product>,
        cases: Vec<ResolvedCase>,
    ) -> Self {
        Self {
            buckets,
            incidents,
            maintenance,
            products,
            cases,
        }
    }

    /// The built-in fixture catalog. Incident and maintenance timestamps are
    /// offsets from `now`, so the caller anchors them at load time.
    pub fn builtin(now: DateTime<Utc>) -> Result<Self, CatalogError> {
        fixtures::builtin_catalog(now)
    }

    /// Checks every catalog-level invariant: unique lowercase bucket keys,
    /// each site in exactly one bucket, per-record validation, non-empty
    /// tables, and that every product index the recommendation rules
    /// reference exists.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.buckets.is_empty() {
            return Err(CatalogError::EmptyTable("sites"));
        }
        if self.products.is_empty() {
            return Err(CatalogError::EmptyTable("products"));
        }
        if self.cases.is_empty() {
            return Err(CatalogError::EmptyTable("cases"));
        }
        let mut keys = BTreeSet::new();
        let mut site_ids: BTreeSet<SiteId> = BTreeSet::new();
        for bucket in &self.buckets {
            if bucket.key != bucket.key.to_lowercase() {
                return Err(CatalogError::NonLowercaseBucketKey(bucket.key.clone()));
            }
            if !keys.insert(bucket.key.clone()) {
                return Err(CatalogError::DuplicateBucketKey(bucket.key.clone()));
            }
            if bucket.sites.is_empty() {
                return Err(CatalogError::EmptyTable("sites"));
            }
            for site in &bucket.sites {
                if !site_ids.insert(site.site_id.clone()) {
                    return Err(CatalogError::DuplicateSiteId(
                        site.site_id.as_str().to_string(),
                    ));
                }
            }
        }
        for window in &self.maintenance {
            window.validate()?;
        }
        for case in &self.cases {
            case.validate()?;
        }
        for idx in [
            PRODUCT_ANOMALY_DETECTION,
            PRODUCT_GEOLOCATION,
            PRODUCT_TELCO_FABRIC,
            PRODUCT_INTERFERENCE_DETECTION,
        ] {
            if idx >= self.products.len() {
                return Err(CatalogError::MissingProductIndex(idx));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn buckets(&self) -> &[SiteBucket] {
        &self.buckets
    }

    /// Bucket keys in catalog order. Carried inside the not-found error so
    /// callers learn the valid inputs.
    #[must_use]
    pub fn bucket_keys(&self) -> Vec<String> {
        self.buckets.iter().map(|b| b.key.clone()).collect()
    }

    /// Exact (case-insensitive) bucket lookup. No fuzzy matching here; the
    /// diagnostic aggregator applies its own looser rule.
    #[must_use]
    pub fn sites_for_key(&self, location: &str) -> Option<&[CellSite]> {
        self.buckets
            .iter()
            .find(|b| b.key.eq_ignore_ascii_case(location))
            .map(|b| b.sites.as_slice())
    }

    #[must_use]
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    #[must_use]
    pub fn maintenance(&self) -> &[MaintenanceWindow] {
        &self.maintenance
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn product(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    #[must_use]
    pub fn cases(&self) -> &[ResolvedCase] {
        &self.cases
    }
}
