#![forbid(unsafe_code)]
//! Cellatlas domain model SSOT.
//!
//! All entities here are immutable value objects: parsed or constructed
//! once when the catalog loads, then only read. String-typed status and
//! severity fields from the wire map to closed enums with strict parsers;
//! unrecognized values are rejected, never passed through.

mod error;
mod ids;
mod incident;
mod maintenance;
mod site;
mod solutions;

pub use error::{ParseError, ValidationError};
pub use ids::{CaseId, IncidentId, MaintenanceId, SiteId, ID_MAX_LEN};
pub use incident::{Incident, IncidentStatus, IssueType, Severity};
pub use maintenance::MaintenanceWindow;
pub use site::{CellSite, Coordinates, NetworkTechnology, SiteStatus};
pub use solutions::{LocationType, Product, ResolvedCase};

pub const CRATE_NAME: &str = "cellatlas-model";
