// Unit tests for Brew Quality

use brew_quality::core::{
    cosine_similarity, preference_vector, QualityClassifier, RecommendError, Recommender,
};
use brew_quality::models::{Catalog, CoffeeAttributes, UserPreferences, FEATURE_ORDER};
use brew_quality::services::load_model;
use std::sync::Arc;

const FIXTURE_MODEL: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/forest.json");

fn sample(moisture: f64, aroma: f64, flavor: f64) -> CoffeeAttributes {
    CoffeeAttributes {
        moisture_percentage: moisture,
        altitude: 1500.0,
        country_encoded: 1.0,
        aroma,
        flavor,
        aftertaste: 7.0,
        acidity: 6.0,
        body: 7.0,
        balance: 7.0,
        sweetness: 8.0,
    }
}

#[test]
fn test_feature_order_is_fixed() {
    assert_eq!(
        FEATURE_ORDER,
        [
            "moisture_percentage",
            "altitude",
            "country_encoded",
            "aroma",
            "flavor",
            "aftertaste",
            "acidity",
            "body",
            "balance",
            "sweetness",
        ]
    );
}

#[test]
fn test_fixture_forest_votes() {
    let forest = load_model(FIXTURE_MODEL).unwrap();

    // Both trees agree
    assert_eq!(forest.predict(&sample(12.0, 8.0, 7.5).feature_vector()).unwrap(), "High Quality");
    assert_eq!(forest.predict(&sample(12.0, 5.0, 6.0).feature_vector()).unwrap(), "Low Quality");

    // Trees disagree, averaged probabilities decide
    assert_eq!(forest.predict(&sample(14.0, 8.0, 8.0).feature_vector()).unwrap(), "High Quality");
    assert_eq!(forest.predict(&sample(14.0, 8.0, 6.0).feature_vector()).unwrap(), "Low Quality");
}

#[test]
fn test_fixture_forest_probabilities_sum_to_one() {
    let forest = load_model(FIXTURE_MODEL).unwrap();
    let probabilities = forest.class_probabilities(&sample(14.0, 8.0, 8.0).feature_vector()).unwrap();

    assert!((probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    assert!((probabilities[0] - 0.625).abs() < 1e-12);
}

#[test]
fn test_cosine_similarity_scale_invariance() {
    let user = [6.0, 6.5, 4.0, 8.0, 7.0];
    let profile = [8.0, 7.5, 6.0, 7.0, 8.0];
    let base = cosine_similarity(&user, &profile).unwrap();

    let scaled: Vec<f64> = profile.iter().map(|x| x * 2.5).collect();
    assert!((cosine_similarity(&user, &scaled).unwrap() - base).abs() < 1e-12);
    assert!(base > 0.0 && base <= 1.0);
}

#[test]
fn test_preference_vector_by_name() {
    let prefs: UserPreferences = [
        ("body", 4.0),
        ("aroma", 1.0),
        ("sweetness", 5.0),
        ("flavor", 2.0),
        ("acidity", 3.0),
    ]
    .into_iter()
    .collect();

    assert_eq!(preference_vector(&prefs).unwrap(), [1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn test_empty_preferences_rejected() {
    let err = preference_vector(&UserPreferences::default()).unwrap_err();
    assert!(matches!(err, RecommendError::DimensionMismatch { expected: 5, actual: 0 }));
}

#[test]
fn test_recommender_with_fixture_forest() {
    let forest = load_model(FIXTURE_MODEL).unwrap();
    let recommender = Recommender::with_defaults(Arc::new(Catalog::reference()));
    let prefs: UserPreferences = [
        ("aroma", 8.0),
        ("flavor", 7.5),
        ("acidity", 6.0),
        ("body", 7.0),
        ("sweetness", 8.0),
    ]
    .into_iter()
    .collect();

    let result = recommender.rank(&forest, &prefs).unwrap();

    assert_eq!(result.total_candidates, 1);
    assert_eq!(result.qualified, 1);
    assert_eq!(result.ranked[0].coffee_id, 1);
    assert_eq!(result.ranked[0].similarity_score, 1.0);
}
