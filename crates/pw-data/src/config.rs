//! Backend endpoint configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Backend configuration, editable at runtime from the settings panel.
///
/// Requests snapshot the URL when they are issued (`ApiClient` owns its
/// copy), so an edit never applies to a request already in flight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}
