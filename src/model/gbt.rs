//! Gradient-boosted tree ensemble evaluation
//!
//! The classifier inside the bundle is a flat serialization of the
//! trained booster: each tree is a node array, each split routes on one
//! feature position. The model has no feature names, only positions, so
//! input rows must match the training-time feature order exactly.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

/// One tree node. Splits route left when `row[feature] < threshold`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Walk the tree from the root and return the leaf margin.
    fn score(&self, row: ArrayView1<f64>) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { value } => return *value,
                Node::Split { feature, threshold, left, right } => {
                    idx = if row[*feature] < *threshold { *left } else { *right };
                }
            }
        }
    }
}

/// Trained binary classifier over a fixed-order feature vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GbtModel {
    /// Bias in margin (log-odds) space
    pub base_score: f64,
    pub trees: Vec<Tree>,
}

impl GbtModel {
    /// Raw margin: base score plus the sum of tree outputs.
    pub fn predict_margin(&self, row: ArrayView1<f64>) -> f64 {
        self.base_score + self.trees.iter().map(|t| t.score(row)).sum::<f64>()
    }

    /// Positive-class (fraud) probability for a single row.
    pub fn predict_proba(&self, row: ArrayView1<f64>) -> f64 {
        sigmoid(self.predict_margin(row))
    }

    /// Structural checks run once at load time. Split feature positions
    /// must fit the schema and children must point forward, so tree
    /// walks always terminate at a leaf.
    pub fn validate(&self, num_features: usize) -> Result<(), String> {
        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(format!("tree {} has no nodes", t));
            }
            for (i, node) in tree.nodes.iter().enumerate() {
                if let Node::Split { feature, left, right, .. } = node {
                    if *feature >= num_features {
                        return Err(format!(
                            "tree {} node {} splits on feature {} but schema has {}",
                            t, i, feature, num_features
                        ));
                    }
                    if *left >= tree.nodes.len() || *right >= tree.nodes.len() {
                        return Err(format!("tree {} node {} child out of bounds", t, i));
                    }
                    if *left <= i || *right <= i {
                        return Err(format!("tree {} node {} child does not point forward", t, i));
                    }
                }
            }
        }
        Ok(())
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
impl GbtModel {
    /// Stub model returning a fixed probability for any input
    pub fn constant(probability: f64) -> Self {
        Self {
            base_score: (probability / (1.0 - probability)).ln(),
            trees: Vec::new(),
        }
    }
}
