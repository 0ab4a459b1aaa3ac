//! Boundaries between the scoring runtime and the outside world.

pub mod artifacts;
pub mod models;
pub mod storage;

pub use artifacts::{ArtifactError, ArtifactStorePort};
pub use models::{PointModel, ProbabilityModel};
pub use storage::{DatasetPort, TableSinkPort, TelemetrySourcePort};
