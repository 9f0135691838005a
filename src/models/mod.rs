// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Catalog, CoffeeAttributes, CoffeeProfile, FeatureVector, Recommendation, ScoredProfile,
    FEATURE_COUNT, FEATURE_ORDER, SIMILARITY_ATTRIBUTES,
};
pub use requests::{PredictRequest, UserPreferences};
pub use responses::{ClosestCoffeeResponse, ErrorResponse, HealthResponse, PredictResponse, RecommendResponse};
