use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::classifier::{ClassifierError, QualityClassifier};
use crate::models::{FeatureVector, FEATURE_COUNT, FEATURE_ORDER};

/// Reasons a forest artifact is rejected at load time
#[derive(Debug, Error, PartialEq)]
pub enum ForestError {
    #[error("Model expects {0} features, this service supplies {supplied}", supplied = FEATURE_COUNT)]
    FeatureCount(usize),

    #[error("Model declares no classes")]
    NoClasses,

    #[error("Model contains no trees")]
    NoTrees,

    #[error("Tree {tree} has no nodes")]
    EmptyTree { tree: usize },

    #[error("Tree {tree} node {node}: child {child} must come after its parent and exist")]
    BadChild { tree: usize, node: usize, child: usize },

    #[error("Tree {tree} node {node}: feature index {feature} out of range")]
    BadFeature { tree: usize, node: usize, feature: usize },

    #[error("Tree {tree} node {node}: threshold is not finite")]
    BadThreshold { tree: usize, node: usize },

    #[error("Tree {tree} node {node}: expected {expected} class weights, got {actual}")]
    LeafArity { tree: usize, node: usize, expected: usize, actual: usize },

    #[error("Tree {tree} node {node}: class weights must be non-negative with a positive sum")]
    LeafWeights { tree: usize, node: usize },
}

/// One decision tree node
///
/// Split nodes send `x[feature] <= threshold` left, everything else right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

/// Serialized random forest as exported from training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestArtifact {
    pub n_features: usize,
    pub classes: Vec<String>,
    pub trees: Vec<DecisionTree>,
}

/// Random forest quality classifier
///
/// Predictions average each tree's normalized leaf distribution and pick the
/// most probable class; ties go to the lowest class index.
#[derive(Debug, Clone)]
pub struct ForestClassifier {
    classes: Vec<String>,
    trees: Vec<DecisionTree>,
}

impl ForestClassifier {
    /// Validate an artifact and build a classifier from it
    pub fn from_artifact(artifact: ForestArtifact) -> Result<Self, ForestError> {
        if artifact.n_features != FEATURE_COUNT {
            return Err(ForestError::FeatureCount(artifact.n_features));
        }
        if artifact.classes.is_empty() {
            return Err(ForestError::NoClasses);
        }
        if artifact.trees.is_empty() {
            return Err(ForestError::NoTrees);
        }

        let n_classes = artifact.classes.len();
        for (t, tree) in artifact.trees.iter().enumerate() {
            validate_tree(t, tree, n_classes)?;
        }

        Ok(Self {
            classes: artifact.classes,
            trees: artifact.trees,
        })
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Mean class probabilities over all trees, indexed like `labels()`
    pub fn class_probabilities(&self, features: &FeatureVector) -> Result<Vec<f64>, ClassifierError> {
        if let Some(idx) = features.iter().position(|x| !x.is_finite()) {
            return Err(ClassifierError::NonFiniteFeature { name: FEATURE_ORDER[idx] });
        }

        let mut totals = vec![0.0; self.classes.len()];
        for (t, tree) in self.trees.iter().enumerate() {
            let leaf = leaf_for(tree, features).ok_or(ClassifierError::UnterminatedTree { tree: t })?;
            let sum: f64 = leaf.iter().sum();
            for (total, weight) in totals.iter_mut().zip(leaf) {
                *total += weight / sum;
            }
        }

        let n = self.trees.len() as f64;
        totals.iter_mut().for_each(|p| *p /= n);
        Ok(totals)
    }
}

impl QualityClassifier for ForestClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<String, ClassifierError> {
        let probabilities = self.class_probabilities(features)?;

        let mut best: Option<(usize, f64)> = None;
        for (idx, p) in probabilities.into_iter().enumerate() {
            match best {
                Some((_, best_p)) if p <= best_p => {}
                _ => best = Some((idx, p)),
            }
        }

        best.map(|(idx, _)| self.classes[idx].clone())
            .ok_or(ClassifierError::NoLabel)
    }

    fn labels(&self) -> &[String] {
        &self.classes
    }
}

/// Walk a tree from the root to its leaf weights
///
/// Validated trees only point forward, so the walk takes at most `nodes.len()` steps.
#[inline]
fn leaf_for<'a>(tree: &'a DecisionTree, features: &FeatureVector) -> Option<&'a [f64]> {
    let mut idx = 0;
    for _ in 0..tree.nodes.len() {
        match tree.nodes.get(idx)? {
            TreeNode::Leaf { value } => return Some(value),
            TreeNode::Split { feature, threshold, left, right } => {
                idx = if features[*feature] <= *threshold { *left } else { *right };
            }
        }
    }
    None
}

fn validate_tree(t: usize, tree: &DecisionTree, n_classes: usize) -> Result<(), ForestError> {
    if tree.nodes.is_empty() {
        return Err(ForestError::EmptyTree { tree: t });
    }

    let n_nodes = tree.nodes.len();
    for (n, node) in tree.nodes.iter().enumerate() {
        match node {
            TreeNode::Split { feature, threshold, left, right } => {
                if *feature >= FEATURE_COUNT {
                    return Err(ForestError::BadFeature { tree: t, node: n, feature: *feature });
                }
                if !threshold.is_finite() {
                    return Err(ForestError::BadThreshold { tree: t, node: n });
                }
                for child in [*left, *right] {
                    if child <= n || child >= n_nodes {
                        return Err(ForestError::BadChild { tree: t, node: n, child });
                    }
                }
            }
            TreeNode::Leaf { value } => {
                if value.len() != n_classes {
                    return Err(ForestError::LeafArity {
                        tree: t,
                        node: n,
                        expected: n_classes,
                        actual: value.len(),
                    });
                }
                let valid = value.iter().all(|w| w.is_finite() && *w >= 0.0);
                if !valid || value.iter().sum::<f64>() <= 0.0 {
                    return Err(ForestError::LeafWeights { tree: t, node: n });
                }
            }
        }
    }

    Ok(())
}
