use serde::{Deserialize, Serialize};

/// Service banner for `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Number of events currently in the catalog
    pub events: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Location update response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLocationResponse {
    pub status: String,
    pub message: String,
    pub presence_id: String,
}
