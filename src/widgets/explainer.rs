//! PMBOK-vs-Agile explainer panel state.
//!
//! A binary visibility toggle over a constant comparison block. The
//! content is re-read from the knowledge table every time the panel is
//! shown, which is idempotent since the table never changes.

use crate::models::knowledge::{EXPLAINER_SECTIONS, ExplainerSection};

#[derive(Debug, Default)]
pub struct ExplainerPanel {
    visible: bool,
}

impl ExplainerPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// The comparison block, when visible.
    pub fn sections(&self) -> Option<&'static [ExplainerSection]> {
        self.visible.then_some(&EXPLAINER_SECTIONS[..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_by_default() {
        let panel = ExplainerPanel::new();
        assert!(!panel.is_visible());
        assert!(panel.sections().is_none());
    }

    #[test]
    fn test_toggle_shows_then_hides() {
        let mut panel = ExplainerPanel::new();
        panel.toggle();
        assert!(panel.is_visible());
        assert_eq!(panel.sections().unwrap().len(), 4);
        panel.toggle();
        assert!(!panel.is_visible());
    }

    #[test]
    fn test_reshow_yields_same_content() {
        let mut panel = ExplainerPanel::new();
        panel.toggle();
        let first = panel.sections().unwrap();
        panel.toggle();
        panel.toggle();
        let second = panel.sections().unwrap();
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].heading, second[0].heading);
    }
}
