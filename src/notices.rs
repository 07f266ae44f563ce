//! Transient notices.
//!
//! Error banners and assistive status announcements share one mechanism:
//! a notice is pushed to the board, a dismiss timer is scheduled for it,
//! and the notice is removed when that timer fires. Notices pushed in
//! quick succession coexist; there is no dedup.

use crate::models::Tab;

/// Visual severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Validation or generation failure, shown in the error style.
    Error,
    /// Assistive announcement, shown in the status style.
    Status,
}

/// A transient message attached to a tab's notice area.
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub tab: Tab,
    pub text: String,
}

/// All live notices, in push order.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notice and return its id, for scheduling the dismiss timer.
    pub fn push(&mut self, kind: NoticeKind, tab: Tab, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            kind,
            tab,
            text: text.into(),
        });
        id
    }

    /// Remove the notice with the given id. Removing an already-dismissed
    /// id is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    /// Live notices for one tab, in push order.
    pub fn for_tab(&self, tab: Tab) -> impl Iterator<Item = &Notice> {
        self.notices.iter().filter(move |n| n.tab == tab)
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_unique_ids() {
        let mut board = NoticeBoard::new();
        let a = board.push(NoticeKind::Error, Tab::Stories, "first");
        let b = board.push(NoticeKind::Error, Tab::Stories, "second");
        assert_ne!(a, b);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_concurrent_notices_coexist() {
        let mut board = NoticeBoard::new();
        board.push(NoticeKind::Error, Tab::Stories, "same text");
        board.push(NoticeKind::Error, Tab::Stories, "same text");
        assert_eq!(board.for_tab(Tab::Stories).count(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut board = NoticeBoard::new();
        let a = board.push(NoticeKind::Error, Tab::Stories, "first");
        let b = board.push(NoticeKind::Status, Tab::Velocity, "second");
        board.dismiss(a);
        assert_eq!(board.len(), 1);
        assert_eq!(board.for_tab(Tab::Velocity).next().map(|n| n.id), Some(b));
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut board = NoticeBoard::new();
        board.push(NoticeKind::Status, Tab::Velocity, "only");
        board.dismiss(999);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_for_tab_filters_by_tab() {
        let mut board = NoticeBoard::new();
        board.push(NoticeKind::Error, Tab::Stories, "stories");
        board.push(NoticeKind::Error, Tab::Release, "release");
        let texts: Vec<&str> = board.for_tab(Tab::Release).map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["release"]);
    }
}
