//! UI module for pmlab-tui
//!
//! This module contains the per-frame rendering functions: the tabs bar,
//! each tab's panel, the velocity chart, and transient notices.

mod chart;
mod generators;
mod helpers;
mod panels;
mod render;

pub use helpers::{spinner_frame, wrap_text};
pub use render::draw;
