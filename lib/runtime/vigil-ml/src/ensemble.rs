//! Tree-ensemble model artifacts.
//!
//! Boosted classifiers and forest regressors exported as JSON share one
//! layout: a list of binary trees, each stored as a flat node array with the
//! root at index 0. A row's raw score is the sum (boosting) or the mean
//! (forest) of the leaves it reaches, plus `base_score`. The logistic link
//! turns that raw score into a probability.

use anyhow::{Context, Result, bail, ensure};
use ndarray::{Array1, Array2, ArrayView1, Axis, stack};
use serde::{Deserialize, Serialize};

use vigil_domain::FeatureView;
use vigil_ports::{PointModel, ProbabilityModel};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    #[default]
    Sum,
    Mean,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Link {
    #[default]
    Identity,
    Logistic,
}

/// Comparison sending a present value to the left child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitRule {
    #[default]
    LessThan,
    LessOrEqual,
}

impl SplitRule {
    fn goes_left(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::LessThan => value < threshold,
            Self::LessOrEqual => value <= threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
        /// Direction taken when the feature value is missing (NaN).
        #[serde(default)]
        missing_left: bool,
    },
    Leaf {
        leaf: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    fn validate(&self, index: usize, n_features: Option<usize>) -> Result<()> {
        ensure!(!self.nodes.is_empty(), "tree {index} has no nodes");
        for (position, node) in self.nodes.iter().enumerate() {
            let Node::Split {
                feature,
                left,
                right,
                ..
            } = node
            else {
                continue;
            };
            for child in [left, right] {
                ensure!(
                    *child > position && *child < self.nodes.len(),
                    "tree {index} node {position} points at invalid child {child}"
                );
            }
            if let Some(n_features) = n_features {
                ensure!(
                    *feature < n_features,
                    "tree {index} node {position} splits on feature {feature} of {n_features}"
                );
            }
        }
        Ok(())
    }

    /// Follows splits from the root. Children always sit after their parent,
    /// so the walk terminates.
    fn leaf_value(&self, row: ArrayView1<'_, f64>, rule: SplitRule) -> f64 {
        let mut position = 0;
        loop {
            match &self.nodes[position] {
                Node::Leaf { leaf } => return *leaf,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    missing_left,
                } => {
                    let value = row[*feature];
                    let go_left = if value.is_nan() {
                        *missing_left
                    } else {
                        rule.goes_left(value, *threshold)
                    };
                    position = if go_left { *left } else { *right };
                }
            }
        }
    }

    fn max_feature(&self) -> Option<usize> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                Node::Split { feature, .. } => Some(*feature),
                Node::Leaf { .. } => None,
            })
            .max()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsemble {
    /// Input columns in the order the trees index them. May be empty for
    /// artifacts exported without names.
    #[serde(default)]
    pub feature_names: Vec<String>,
    /// Added to the aggregated leaves before the link is applied.
    #[serde(default)]
    pub base_score: f64,
    #[serde(default)]
    pub aggregation: Aggregation,
    #[serde(default)]
    pub link: Link,
    #[serde(default)]
    pub split_rule: SplitRule,
    pub trees: Vec<Tree>,
}

impl TreeEnsemble {
    pub fn from_json(raw: &str) -> Result<Self> {
        let ensemble: Self = serde_json::from_str(raw).context("invalid tree ensemble")?;
        ensemble.validate()?;
        Ok(ensemble)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.trees.is_empty(), "tree ensemble has no trees");
        let n_features = (!self.feature_names.is_empty()).then_some(self.feature_names.len());
        for (index, tree) in self.trees.iter().enumerate() {
            tree.validate(index, n_features)?;
        }
        Ok(())
    }

    /// Smallest input width the trees can index into.
    pub fn required_width(&self) -> usize {
        if !self.feature_names.is_empty() {
            return self.feature_names.len();
        }
        self.trees
            .iter()
            .filter_map(Tree::max_feature)
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Arranges the view's columns the way the trees expect them.
    pub fn align(&self, view: &FeatureView) -> Result<Array2<f64>> {
        if !self.feature_names.is_empty() {
            return view.select(&self.feature_names);
        }
        let required = self.required_width();
        if view.n_features() < required {
            bail!(
                "model reads {required} features but the view has {}",
                view.n_features()
            );
        }
        Ok(view.values().clone())
    }

    /// Aggregated leaves plus `base_score`, before the link. `inputs` must be
    /// at least [`required_width`](Self::required_width) columns wide.
    pub fn raw_scores(&self, inputs: &Array2<f64>) -> Result<Array1<f64>> {
        let required = self.required_width();
        ensure!(
            inputs.ncols() >= required,
            "model reads {required} features but the input has {}",
            inputs.ncols()
        );
        Ok(inputs
            .rows()
            .into_iter()
            .map(|row| {
                let total: f64 = self
                    .trees
                    .iter()
                    .map(|tree| tree.leaf_value(row, self.split_rule))
                    .sum();
                let aggregated = match self.aggregation {
                    Aggregation::Sum => total,
                    Aggregation::Mean => total / self.trees.len() as f64,
                };
                aggregated + self.base_score
            })
            .collect())
    }

    pub fn predict(&self, view: &FeatureView) -> Result<Array1<f64>> {
        let inputs = self.align(view)?;
        let raw = self.raw_scores(&inputs)?;
        Ok(match self.link {
            Link::Identity => raw,
            Link::Logistic => raw.mapv(sigmoid),
        })
    }
}

fn sigmoid(margin: f64) -> f64 {
    1.0 / (1.0 + (-margin).exp())
}

/// Binary failure classifier backed by a logistic tree ensemble.
#[derive(Debug, Clone)]
pub struct TreeClassifier {
    ensemble: TreeEnsemble,
}

impl TreeClassifier {
    pub fn new(ensemble: TreeEnsemble) -> Result<Self> {
        ensure!(
            ensemble.link == Link::Logistic,
            "classifier artifact must use the logistic link"
        );
        Ok(Self { ensemble })
    }

    pub fn ensemble(&self) -> &TreeEnsemble {
        &self.ensemble
    }
}

impl ProbabilityModel for TreeClassifier {
    fn predict_proba(&self, view: &FeatureView) -> Result<Array2<f64>> {
        let positive = self.ensemble.predict(view)?;
        let negative = positive.mapv(|p| 1.0 - p);
        Ok(stack(Axis(1), &[negative.view(), positive.view()])?)
    }
}

/// Point regressor backed by a tree ensemble with the identity link.
#[derive(Debug, Clone)]
pub struct TreeRegressor {
    ensemble: TreeEnsemble,
}

impl TreeRegressor {
    pub fn new(ensemble: TreeEnsemble) -> Result<Self> {
        ensure!(
            ensemble.link == Link::Identity,
            "regressor artifact must use the identity link"
        );
        Ok(Self { ensemble })
    }

    pub fn ensemble(&self) -> &TreeEnsemble {
        &self.ensemble
    }
}

impl PointModel for TreeRegressor {
    fn predict(&self, view: &FeatureView) -> Result<Array1<f64>> {
        self.ensemble.predict(view)
    }
}
