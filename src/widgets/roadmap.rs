//! Roadmap explorer state.
//!
//! Three fixed topic cards (Vision, Roadmap, Release) with roving keyboard
//! focus. Selecting a card swaps the details panel to that topic's static
//! content; keys outside the mapped set are silent no-ops.

use crate::models::RoadmapTopic;
use crate::models::knowledge::{TOPIC_RELEASE, TOPIC_ROADMAP, TOPIC_VISION, TopicRecord};

/// Look up the static content record for a topic. The match is total, so
/// the old "unknown id leaves the panel unchanged" behavior survives as
/// unmapped keys simply never reaching `select`.
pub fn topic_record(topic: RoadmapTopic) -> &'static TopicRecord {
    match topic {
        RoadmapTopic::Vision => &TOPIC_VISION,
        RoadmapTopic::Roadmap => &TOPIC_ROADMAP,
        RoadmapTopic::Release => &TOPIC_RELEASE,
    }
}

pub struct RoadmapExplorer {
    /// Card with keyboard focus.
    focused: RoadmapTopic,
    /// Card whose content fills the details panel, if any yet.
    selected: Option<RoadmapTopic>,
}

impl RoadmapExplorer {
    pub fn new() -> Self {
        Self {
            focused: RoadmapTopic::Vision,
            selected: None,
        }
    }

    pub fn focused(&self) -> RoadmapTopic {
        self.focused
    }

    pub fn selected(&self) -> Option<RoadmapTopic> {
        self.selected
    }

    /// Move focus to the next card, clamped at the last.
    pub fn focus_next(&mut self) {
        let idx = RoadmapTopic::ALL
            .iter()
            .position(|t| *t == self.focused)
            .unwrap_or(0);
        self.focused = RoadmapTopic::ALL[(idx + 1).min(RoadmapTopic::ALL.len() - 1)];
    }

    /// Move focus to the previous card, clamped at the first.
    pub fn focus_prev(&mut self) {
        let idx = RoadmapTopic::ALL
            .iter()
            .position(|t| *t == self.focused)
            .unwrap_or(0);
        self.focused = RoadmapTopic::ALL[idx.saturating_sub(1)];
    }

    /// Mark `topic` selected, deselecting any other.
    pub fn select(&mut self, topic: RoadmapTopic) {
        self.focused = topic;
        self.selected = Some(topic);
    }

    /// Select the card that currently has focus.
    pub fn select_focused(&mut self) {
        self.select(self.focused);
    }

    /// Content for the details panel, or None before the first selection.
    pub fn details(&self) -> Option<&'static TopicRecord> {
        self.selected.map(topic_record)
    }
}

impl Default for RoadmapExplorer {
    fn default() -> Self {
        Self::new()
    }
}
