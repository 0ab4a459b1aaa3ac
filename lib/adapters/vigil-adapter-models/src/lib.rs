//! Loads pre-trained model artifacts from the filesystem.

pub mod store;

pub use store::FileArtifactStore;
