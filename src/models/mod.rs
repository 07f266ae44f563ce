//! Data models for pmlab-tui
//!
//! This module contains the core data structures:
//! - Fixed knowledge tables backing every widget
//! - Enums for navigation and state management

pub mod enums;
pub mod knowledge;

// Re-exports for convenient access
pub use enums::{GeneratorKind, Mode, RoadmapTopic, Tab};
