//! Velocity tracker state.
//!
//! An append-only series of sprint/points pairs, seeded with six fixed
//! entries and grown by sampling. Storing label and points together in one
//! `Vec<Sprint>` makes the labels/points length invariant structural.

use rand::Rng;

use crate::models::knowledge::INITIAL_VELOCITY;
use crate::utils::sample_velocity;

/// One bar of the velocity chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprint {
    pub label: String,
    pub points: u32,
}

pub struct VelocityTracker {
    series: Vec<Sprint>,
}

impl VelocityTracker {
    /// Seed the series with the six fixed initial sprints.
    pub fn new() -> Self {
        let series = INITIAL_VELOCITY
            .iter()
            .enumerate()
            .map(|(i, &points)| Sprint {
                label: format!("Sprint {}", i + 1),
                points,
            })
            .collect();
        Self { series }
    }

    /// Sample a new velocity and append it as the next sprint. Returns a
    /// copy of the appended entry so the caller can announce it.
    pub fn add_sprint<R: Rng>(&mut self, rng: &mut R) -> Sprint {
        let sprint = Sprint {
            label: format!("Sprint {}", self.series.len() + 1),
            points: sample_velocity(rng),
        };
        self.series.push(sprint.clone());
        sprint
    }

    pub fn sprints(&self) -> &[Sprint] {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}
