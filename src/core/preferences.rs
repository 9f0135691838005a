use crate::core::recommender::RecommendError;
use crate::models::{UserPreferences, SIMILARITY_ATTRIBUTES};

/// Build the preference vector in `SIMILARITY_ATTRIBUTES` order
///
/// Values are looked up by name, so key order in the request body is irrelevant.
/// The mapping must contain exactly the five similarity attributes.
pub fn preference_vector(prefs: &UserPreferences) -> Result<[f64; 5], RecommendError> {
    if prefs.len() != SIMILARITY_ATTRIBUTES.len() {
        return Err(RecommendError::DimensionMismatch {
            expected: SIMILARITY_ATTRIBUTES.len(),
            actual: prefs.len(),
        });
    }

    let mut vector = [0.0; 5];
    for (slot, name) in vector.iter_mut().zip(SIMILARITY_ATTRIBUTES) {
        *slot = prefs
            .get(name)
            .ok_or(RecommendError::MissingPreference(name))?;
    }

    Ok(vector)
}
