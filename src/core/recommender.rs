use std::sync::Arc;

use thiserror::Error;

use crate::core::{
    classifier::{ClassifierError, QualityClassifier},
    preferences::preference_vector,
    similarity::{cosine_similarity, DimensionMismatch},
};
use crate::models::{Catalog, Recommendation, ScoredProfile, UserPreferences};

/// Label a profile must receive to be recommended
pub const HIGH_QUALITY_LABEL: &str = "High Quality";

/// Default number of recommendations returned
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Errors that can occur while ranking the catalog
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Expected {expected} preference values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Missing preference value for {0}")]
    MissingPreference(&'static str),

    #[error("Classifier failed: {0}")]
    Classifier(#[from] ClassifierError),
}

impl From<DimensionMismatch> for RecommendError {
    fn from(err: DimensionMismatch) -> Self {
        Self::DimensionMismatch {
            expected: err.expected,
            actual: err.actual,
        }
    }
}

/// Result of a ranking pass
#[derive(Debug)]
pub struct RankResult {
    pub ranked: Vec<ScoredProfile>,
    pub total_candidates: usize,
    pub qualified: usize,
}

/// Catalog ranking pipeline
///
/// # Pipeline Stages
/// 1. Quality gate: classify every catalog entry, keep the target label
/// 2. Preference vector lookup, on the first survivor
/// 3. Cosine similarity against aroma, flavor, acidity, body, sweetness
/// 4. Stable sort (descending) and truncation
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    target_label: String,
    max_results: usize,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>, target_label: impl Into<String>, max_results: usize) -> Self {
        Self {
            catalog,
            target_label: target_label.into(),
            max_results,
        }
    }

    pub fn with_defaults(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, HIGH_QUALITY_LABEL, DEFAULT_MAX_RESULTS)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn target_label(&self) -> &str {
        &self.target_label
    }

    /// Classify, filter, score and rank the catalog against `prefs`
    ///
    /// Preferences are only read once a profile passes the quality gate. When
    /// nothing qualifies the result is empty whatever shape `prefs` has.
    pub fn rank(
        &self,
        classifier: &dyn QualityClassifier,
        prefs: &UserPreferences,
    ) -> Result<RankResult, RecommendError> {
        let total_candidates = self.catalog.len();
        let mut cached_prefs: Option<[f64; 5]> = None;

        let mut ranked = Vec::new();
        for profile in self.catalog.profiles() {
            let attributes = profile.attributes();
            let quality = classifier.predict(&attributes.feature_vector())?;

            if quality != self.target_label {
                tracing::trace!("Skipping coffee {}: labeled {:?}", profile.id, quality);
                continue;
            }

            let user_vector = match cached_prefs {
                Some(v) => v,
                None => {
                    let v = preference_vector(prefs)?;
                    cached_prefs = Some(v);
                    v
                }
            };
            let similarity_score = cosine_similarity(&user_vector, &attributes.similarity_vector())?;
            ranked.push(ScoredProfile {
                coffee_id: profile.id,
                similarity_score,
                quality,
            });
        }

        let qualified = ranked.len();

        // Stable: equal scores keep catalog order
        ranked.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(self.max_results);

        Ok(RankResult {
            ranked,
            total_candidates,
            qualified,
        })
    }

    /// Top recommendations, best first
    pub fn recommend(
        &self,
        classifier: &dyn QualityClassifier,
        prefs: &UserPreferences,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let result = self.rank(classifier, prefs)?;
        Ok(result.ranked.into_iter().map(Recommendation::from).collect())
    }

    /// The single best match, if any profile qualifies
    pub fn find_closest(
        &self,
        classifier: &dyn QualityClassifier,
        prefs: &UserPreferences,
    ) -> Result<Option<ScoredProfile>, RecommendError> {
        let result = self.rank(classifier, prefs)?;
        Ok(result.ranked.into_iter().next())
    }
}
