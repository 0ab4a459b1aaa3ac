//! Scoring transformation: category encoding, feature projection, dual-model
//! inference and result composition.

pub mod composer;
pub mod encoder;
pub mod ensemble;
pub mod frame;
pub mod inference;
pub mod projector;

pub use composer::{ScoredBatch, compose};
pub use encoder::CategoryEncoder;
pub use ensemble::{TreeClassifier, TreeEnsemble, TreeRegressor};
pub use frame::TelemetryFrame;
pub use inference::{DualInferenceEngine, Predictions};
pub use projector::{FeatureProjector, FeatureViews};

#[cfg(test)]
mod projector_test;
#[cfg(test)]
mod test_support;
