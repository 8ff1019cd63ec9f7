//! Artifact emission
//!
//! Serializes a committed invoice aggregate to a deterministic JSON artifact
//! and publishes it with atomic temp→rename so no partial artifact is ever
//! observable.

mod atomic;
mod emitter;

pub use emitter::{read_artifact, ArtifactEmitter, StagedArtifact};
