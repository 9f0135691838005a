use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request body for `/predict/`
pub use crate::models::domain::CoffeeAttributes as PredictRequest;

/// Free-form attribute preferences sent to `/recommend/` and `/find_closest_coffee/`
///
/// The key set is not checked on deserialization; the recommender decides
/// whether the shape is usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserPreferences(pub HashMap<String, f64>);

impl UserPreferences {
    pub fn get(&self, attribute: &str) -> Option<f64> {
        self.0.get(attribute).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for UserPreferences {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
