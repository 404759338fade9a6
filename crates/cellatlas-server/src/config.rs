use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    pub bind_addr: String,
    pub max_body_bytes: usize,
    /// Per-request info logging; disabled for noise-sensitive deployments.
    pub log_requests: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            max_body_bytes: 16 * 1024,
            log_requests: true,
        }
    }
}
