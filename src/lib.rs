//! Brew Quality - coffee quality prediction and recommendation service
//!
//! This library wraps a trained random-forest quality classifier and a static
//! coffee catalog. It exposes quality prediction for raw sample attributes and
//! ranks catalog entries that the classifier labels "High Quality" by cosine
//! similarity to a user's preferences.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{cosine_similarity, ForestClassifier, QualityClassifier, RecommendError, Recommender};
pub use crate::models::{Catalog, CoffeeAttributes, CoffeeProfile, Recommendation, UserPreferences};
