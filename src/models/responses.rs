use serde::{Deserialize, Serialize};
use crate::models::domain::Recommendation;

/// Response for the quality prediction endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub quality: String,
}

/// Response for the recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
}

/// Response for the closest coffee endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosestCoffeeResponse {
    pub closest_coffee_id: u32,
    pub similarity_score: f64,
    pub quality: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub labels: Vec<String>,
    pub catalog_size: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
