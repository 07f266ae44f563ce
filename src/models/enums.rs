//! Enums used throughout pmlab-tui
//!
//! This module contains the enum types used for navigation and
//! state management.

/// Mode for modal input system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Default mode - keys drive navigation and widget actions
    #[default]
    Normal,
    /// Insert mode - keys edit the active generator's input field
    Insert,
}

/// The six content tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Roadmap,
    Velocity,
    Poker,
    Stories,
    Release,
    Pmbok,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Roadmap,
        Tab::Velocity,
        Tab::Poker,
        Tab::Stories,
        Tab::Release,
        Tab::Pmbok,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Roadmap => "Roadmap",
            Tab::Velocity => "Velocity",
            Tab::Poker => "Planning Poker",
            Tab::Stories => "Story Generator",
            Tab::Release => "Release Plan",
            Tab::Pmbok => "PMBOK vs Agile",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    /// Next tab to the right, clamped at the last tab (no wraparound).
    pub fn next(&self) -> Self {
        let idx = (self.index() + 1).min(Self::ALL.len() - 1);
        Self::ALL[idx]
    }

    /// Previous tab to the left, clamped at the first tab.
    pub fn prev(&self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }
}

/// The three fixed roadmap topic cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadmapTopic {
    Vision,
    Roadmap,
    Release,
}

impl RoadmapTopic {
    pub const ALL: [RoadmapTopic; 3] =
        [RoadmapTopic::Vision, RoadmapTopic::Roadmap, RoadmapTopic::Release];

    pub fn label(&self) -> &'static str {
        match self {
            RoadmapTopic::Vision => "Vision",
            RoadmapTopic::Roadmap => "Roadmap",
            RoadmapTopic::Release => "Release",
        }
    }
}

/// Which artifact generator an action or timer refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    Story,
    Release,
}

impl GeneratorKind {
    pub fn label(&self) -> &'static str {
        match self {
            GeneratorKind::Story => "User Stories",
            GeneratorKind::Release => "Release Plan",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_default() {
        assert_eq!(Tab::default(), Tab::Roadmap);
    }

    #[test]
    fn test_tab_next_clamps_at_end() {
        assert_eq!(Tab::Roadmap.next(), Tab::Velocity);
        assert_eq!(Tab::Release.next(), Tab::Pmbok);
        assert_eq!(Tab::Pmbok.next(), Tab::Pmbok);
    }

    #[test]
    fn test_tab_prev_clamps_at_start() {
        assert_eq!(Tab::Pmbok.prev(), Tab::Release);
        assert_eq!(Tab::Velocity.prev(), Tab::Roadmap);
        assert_eq!(Tab::Roadmap.prev(), Tab::Roadmap);
    }

    #[test]
    fn test_tab_index_matches_order() {
        for (i, tab) in Tab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
    }

    #[test]
    fn test_mode_default_is_normal() {
        assert_eq!(Mode::default(), Mode::Normal);
    }
}
