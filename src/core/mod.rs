// Core algorithm exports
pub mod classifier;
pub mod forest;
pub mod preferences;
pub mod recommender;
pub mod similarity;

pub use classifier::{ClassifierError, QualityClassifier};
pub use forest::{DecisionTree, ForestArtifact, ForestClassifier, ForestError, TreeNode};
pub use preferences::preference_vector;
pub use recommender::{RankResult, RecommendError, Recommender, DEFAULT_MAX_RESULTS, HIGH_QUALITY_LABEL};
pub use similarity::{cosine_similarity, DimensionMismatch};
