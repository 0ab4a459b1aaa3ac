//! Domain models and invariants.

pub mod config;
pub mod features;
pub mod schema;
pub mod scored;
pub mod vocabulary;

pub use config::{IngestConfig, ModelsConfig, TablesConfig, VigilConfig};
pub use features::FeatureView;
pub use scored::{RiskLabel, ScoredRecord, ScoringSummary};
pub use vocabulary::EncodingVocabulary;
