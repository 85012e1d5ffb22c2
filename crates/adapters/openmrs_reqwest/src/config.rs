//! Backend connection configuration.

use serde::Deserialize;

/// Configuration for the OpenMRS backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenmrsConfig {
    /// Root of the OpenMRS web application, e.g. `http://localhost:8080/openmrs`.
    pub base_url: String,
    /// Basic-auth user; requests are anonymous when unset.
    pub username: Option<String>,
    /// Basic-auth password.
    pub password: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for OpenmrsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/openmrs".to_string(),
            username: None,
            password: None,
            timeout_secs: 30,
        }
    }
}
