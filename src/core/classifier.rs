use crate::models::FeatureVector;
use thiserror::Error;

/// Errors raised while classifying a feature vector
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Feature {name} is not a finite number")]
    NonFiniteFeature { name: &'static str },

    #[error("Tree {tree} did not reach a leaf")]
    UnterminatedTree { tree: usize },

    #[error("Classifier produced no label")]
    NoLabel,
}

/// A trained quality model
///
/// Implementations are loaded once and shared read-only between workers.
pub trait QualityClassifier: Send + Sync {
    /// Predict the quality label for a feature vector in `FEATURE_ORDER`
    fn predict(&self, features: &FeatureVector) -> Result<String, ClassifierError>;

    /// Every label the model can emit
    fn labels(&self) -> &[String];
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Classifier that labels everything the same way
    pub struct FixedLabel {
        labels: Vec<String>,
    }

    impl FixedLabel {
        pub fn new(label: &str) -> Self {
            Self { labels: vec![label.to_string()] }
        }
    }

    impl QualityClassifier for FixedLabel {
        fn predict(&self, _features: &FeatureVector) -> Result<String, ClassifierError> {
            Ok(self.labels[0].clone())
        }

        fn labels(&self) -> &[String] {
            &self.labels
        }
    }

    /// Classifier that always fails
    pub struct Broken;

    impl QualityClassifier for Broken {
        fn predict(&self, _features: &FeatureVector) -> Result<String, ClassifierError> {
            Err(ClassifierError::NoLabel)
        }

        fn labels(&self) -> &[String] {
            &[]
        }
    }
}
