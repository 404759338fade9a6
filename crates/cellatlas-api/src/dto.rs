// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiError;
use cellatlas_query::DiagnosticRequest;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Wire shape of the diagnostics request body. Unknown fields are rejected
/// at deserialization; semantic checks live in `validate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticRequestDto {
    pub location: String,
    pub issue_type: String,
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub network_technology: Option<String>,
}

impl DiagnosticRequestDto {
    pub fn validate(self) -> Result<DiagnosticRequest, ApiError> {
        let mut field_errors: Vec<Value> = Vec::new();
        if self.location.trim().is_empty() {
            field_errors.push(json!({"field": "location", "reason": "must be non-empty"}));
        }
        if self.issue_type.trim().is_empty() {
            field_errors.push(json!({"field": "issue_type", "reason": "must be non-empty"}));
        }
        if !field_errors.is_empty() {
            return Err(ApiError::validation_failed(Value::Array(field_errors)));
        }
        Ok(DiagnosticRequest {
            location: self.location,
            issue_type: self.issue_type,
            symptoms: self.symptoms,
            network_technology: self.network_technology,
        })
    }
}
