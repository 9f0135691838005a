use serde::{Deserialize, Serialize};
use validator::Validate;

/// Number of inputs the quality classifier was trained on
pub const FEATURE_COUNT: usize = 10;

/// Ordered classifier input
pub type FeatureVector = [f64; FEATURE_COUNT];

/// Column order the classifier was trained with. Changing it silently breaks predictions.
pub const FEATURE_ORDER: [&str; FEATURE_COUNT] = [
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
];

/// Attributes compared against user preferences, in this order
pub const SIMILARITY_ATTRIBUTES: [&str; 5] = ["aroma", "flavor", "acidity", "body", "sweetness"];

/// Physicochemical and cupping attributes of a coffee sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct CoffeeAttributes {
    #[validate(range(min = 0.0, max = 100.0))]
    pub moisture_percentage: f64,
    pub altitude: f64,
    pub country_encoded: f64,
    pub aroma: f64,
    pub flavor: f64,
    pub aftertaste: f64,
    pub acidity: f64,
    pub body: f64,
    pub balance: f64,
    pub sweetness: f64,
}

impl CoffeeAttributes {
    /// Build the classifier input in `FEATURE_ORDER`
    #[inline]
    pub fn feature_vector(&self) -> FeatureVector {
        [
            self.moisture_percentage,
            self.altitude,
            self.country_encoded,
            self.aroma,
            self.flavor,
            self.aftertaste,
            self.acidity,
            self.body,
            self.balance,
            self.sweetness,
        ]
    }

    /// Subvector used for preference similarity, in `SIMILARITY_ATTRIBUTES` order
    #[inline]
    pub fn similarity_vector(&self) -> [f64; 5] {
        [self.aroma, self.flavor, self.acidity, self.body, self.sweetness]
    }
}

/// Catalog entry
///
/// `aftertaste` and `balance` are optional in catalog sources and default to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CoffeeProfile {
    #[validate(range(min = 1))]
    pub id: u32,
    #[validate(range(min = 0.0, max = 100.0))]
    pub moisture_percentage: f64,
    pub altitude: f64,
    pub country_encoded: f64,
    pub aroma: f64,
    pub flavor: f64,
    #[serde(default)]
    pub aftertaste: f64,
    pub acidity: f64,
    pub body: f64,
    #[serde(default)]
    pub balance: f64,
    pub sweetness: f64,
}

impl CoffeeProfile {
    pub fn attributes(&self) -> CoffeeAttributes {
        CoffeeAttributes {
            moisture_percentage: self.moisture_percentage,
            altitude: self.altitude,
            country_encoded: self.country_encoded,
            aroma: self.aroma,
            flavor: self.flavor,
            aftertaste: self.aftertaste,
            acidity: self.acidity,
            body: self.body,
            balance: self.balance,
            sweetness: self.sweetness,
        }
    }
}

/// Ordered, read-only set of profiles considered for recommendation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    profiles: Vec<CoffeeProfile>,
}

impl Catalog {
    pub fn new(profiles: Vec<CoffeeProfile>) -> Self {
        Self { profiles }
    }

    /// The built-in catalog used when no catalog file is configured
    pub fn reference() -> Self {
        Self::new(vec![CoffeeProfile {
            id: 1,
            moisture_percentage: 12.0,
            altitude: 1500.0,
            country_encoded: 1.0,
            aroma: 8.0,
            flavor: 7.5,
            aftertaste: 0.0,
            acidity: 6.0,
            body: 7.0,
            balance: 0.0,
            sweetness: 8.0,
        }])
    }

    pub fn profiles(&self) -> &[CoffeeProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// A ranked catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub coffee_id: u32,
    pub similarity_score: f64,
}

/// Ranked entry together with the label that qualified it
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredProfile {
    pub coffee_id: u32,
    pub similarity_score: f64,
    pub quality: String,
}

impl From<ScoredProfile> for Recommendation {
    fn from(scored: ScoredProfile) -> Self {
        Self {
            coffee_id: scored.coffee_id,
            similarity_score: scored.similarity_score,
        }
    }
}
