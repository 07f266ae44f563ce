//! Widget state for pmlab-tui
//!
//! Each interactive panel owns its state in a single-purpose struct,
//! constructed once at startup and mutated only by key events and timer
//! fires dispatched from the event loop.

pub mod explainer;
pub mod generator;
pub mod poker;
pub mod roadmap;
pub mod velocity;

// Re-exports for convenient access
pub use explainer::ExplainerPanel;
pub use generator::{Artifact, Generator, Phase};
pub use poker::{EstimationSession, Round};
pub use roadmap::RoadmapExplorer;
pub use velocity::{Sprint, VelocityTracker};
