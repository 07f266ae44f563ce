//! Application state and core logic for pmlab-tui.
//!
//! This module contains the `App` struct which wires every widget state
//! object once at startup and then reacts to exactly two stimuli: key
//! events and timer fires. Widgets never talk to each other; all
//! cross-cutting effects (notices, scheduled work) flow through here.

use std::time::Instant;

use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::models::knowledge::{
    ERROR_NOTICE_TTL, GENERATION_LATENCY, STATUS_NOTICE_TTL, STORY_ADVANCE_DELAY,
};
use crate::models::{GeneratorKind, Mode, RoadmapTopic, Tab};
use crate::notices::{NoticeBoard, NoticeKind};
use crate::timers::{TimerQueue, TimerTask};
use crate::widgets::{
    EstimationSession, ExplainerPanel, Generator, RoadmapExplorer, VelocityTracker,
};

/// Application state
pub struct App {
    pub active_tab: Tab,
    pub mode: Mode,
    pub roadmap: RoadmapExplorer,
    pub velocity: VelocityTracker,
    pub poker: EstimationSession,
    pub story_gen: Generator,
    pub release_gen: Generator,
    pub explainer: ExplainerPanel,
    pub notices: NoticeBoard,
    pub timers: TimerQueue,
    // Animation state for the loading spinner
    pub animation_tick: u64,
    rng: StdRng,
}

impl App {
    /// Wire up every widget. `seed` pins the sampler for deterministic
    /// demos; otherwise it draws from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            active_tab: Tab::default(),
            mode: Mode::default(),
            roadmap: RoadmapExplorer::new(),
            velocity: VelocityTracker::new(),
            poker: EstimationSession::new(),
            story_gen: Generator::new(GeneratorKind::Story),
            release_gen: Generator::new(GeneratorKind::Release),
            explainer: ExplainerPanel::new(),
            notices: NoticeBoard::new(),
            timers: TimerQueue::new(),
            animation_tick: 0,
            rng,
        }
    }

    /// React to one key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, now: Instant) -> bool {
        match self.mode {
            Mode::Insert => {
                self.handle_insert_key(code, now);
                false
            }
            Mode::Normal => self.handle_normal_key(code, now),
        }
    }

    fn handle_insert_key(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Enter => self.submit_generator(now),
            KeyCode::Backspace => {
                if let Some(generator) = self.generator_for_tab_mut() {
                    generator.backspace();
                }
            }
            KeyCode::Char(c) => {
                if let Some(generator) = self.generator_for_tab_mut() {
                    generator.push_char(c);
                }
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode, now: Instant) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Right => self.active_tab = self.active_tab.next(),
            KeyCode::Left => self.active_tab = self.active_tab.prev(),
            _ => self.handle_tab_key(code, now),
        }
        false
    }

    /// Keys owned by the active tab. Anything unmapped is a silent no-op.
    fn handle_tab_key(&mut self, code: KeyCode, now: Instant) {
        match self.active_tab {
            Tab::Roadmap => match code {
                KeyCode::Up => self.roadmap.focus_prev(),
                KeyCode::Down => self.roadmap.focus_next(),
                KeyCode::Enter | KeyCode::Char(' ') => self.roadmap.select_focused(),
                KeyCode::Char('1') => self.roadmap.select(RoadmapTopic::Vision),
                KeyCode::Char('2') => self.roadmap.select(RoadmapTopic::Roadmap),
                KeyCode::Char('3') => self.roadmap.select(RoadmapTopic::Release),
                _ => {}
            },
            Tab::Velocity => {
                if code == KeyCode::Char('a') {
                    self.add_sprint(now);
                }
            }
            Tab::Poker => {
                if let KeyCode::Char(c @ '1'..='7') = code {
                    let card = c as usize - '1' as usize;
                    self.pick_estimate(card, now);
                }
            }
            Tab::Stories | Tab::Release => match code {
                KeyCode::Char('i') => self.mode = Mode::Insert,
                KeyCode::Enter | KeyCode::Char('g') => self.submit_generator(now),
                _ => {}
            },
            Tab::Pmbok => {
                if code == KeyCode::Enter || code == KeyCode::Char('e') {
                    self.explainer.toggle();
                }
            }
        }
    }

    /// Advance animation state and apply every timer whose deadline has
    /// passed. Tasks read current widget state at fire time, never a
    /// snapshot captured when they were scheduled.
    pub fn on_tick(&mut self, now: Instant) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        for task in self.timers.drain_due(now) {
            self.apply(task, now);
        }
    }

    fn apply(&mut self, task: TimerTask, now: Instant) {
        match task {
            TimerTask::DismissNotice(id) => self.notices.dismiss(id),
            TimerTask::AdvanceStory => {
                self.poker.advance();
                debug!(cursor = self.poker.cursor(), "estimation session advanced");
            }
            TimerTask::FinishGeneration(kind) => {
                let tab = self.generator_tab(kind);
                let result = self.generator_mut(kind).finish();
                if let Err(err) = result {
                    self.push_error(tab, err.to_string(), now);
                } else {
                    info!(kind = kind.label(), "artifact generated");
                }
            }
        }
    }

    fn add_sprint(&mut self, now: Instant) {
        let sprint = self.velocity.add_sprint(&mut self.rng);
        let announcement = format!(
            "{} added with {} story points",
            sprint.label, sprint.points
        );
        info!(label = %sprint.label, points = sprint.points, "sprint appended");
        self.push_status(Tab::Velocity, announcement, now);
    }

    fn pick_estimate(&mut self, card: usize, now: Instant) {
        if self.poker.pick(card, &mut self.rng) {
            // First pick of the round anchors the advance; later picks
            // repaint the result but never touch the running timer.
            self.timers
                .schedule(now, STORY_ADVANCE_DELAY, TimerTask::AdvanceStory);
        }
    }

    fn submit_generator(&mut self, now: Instant) {
        let Some(kind) = self.active_generator_kind() else {
            return;
        };
        let tab = self.generator_tab(kind);
        match self.generator_mut(kind).submit() {
            Ok(true) => {
                info!(kind = kind.label(), "generation started");
                self.timers
                    .schedule(now, GENERATION_LATENCY, TimerTask::FinishGeneration(kind));
            }
            Ok(false) => {} // already loading, trigger is disabled
            Err(err) => self.push_error(tab, err.to_string(), now),
        }
    }

    fn push_error(&mut self, tab: Tab, text: String, now: Instant) {
        let id = self.notices.push(NoticeKind::Error, tab, text);
        self.timers
            .schedule(now, ERROR_NOTICE_TTL, TimerTask::DismissNotice(id));
    }

    fn push_status(&mut self, tab: Tab, text: String, now: Instant) {
        let id = self.notices.push(NoticeKind::Status, tab, text);
        self.timers
            .schedule(now, STATUS_NOTICE_TTL, TimerTask::DismissNotice(id));
    }

    fn active_generator_kind(&self) -> Option<GeneratorKind> {
        match self.active_tab {
            Tab::Stories => Some(GeneratorKind::Story),
            Tab::Release => Some(GeneratorKind::Release),
            _ => None,
        }
    }

    fn generator_tab(&self, kind: GeneratorKind) -> Tab {
        match kind {
            GeneratorKind::Story => Tab::Stories,
            GeneratorKind::Release => Tab::Release,
        }
    }

    fn generator_mut(&mut self, kind: GeneratorKind) -> &mut Generator {
        match kind {
            GeneratorKind::Story => &mut self.story_gen,
            GeneratorKind::Release => &mut self.release_gen,
        }
    }

    /// Generator backing the active tab, if the active tab has one.
    pub fn generator_for_tab(&self) -> Option<&Generator> {
        match self.active_tab {
            Tab::Stories => Some(&self.story_gen),
            Tab::Release => Some(&self.release_gen),
            _ => None,
        }
    }

    fn generator_for_tab_mut(&mut self) -> Option<&mut Generator> {
        match self.active_tab {
            Tab::Stories => Some(&mut self.story_gen),
            Tab::Release => Some(&mut self.release_gen),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> App {
        App::new(Some(0))
    }

    fn type_text(app: &mut App, text: &str, now: Instant) {
        app.handle_key(KeyCode::Char('i'), now);
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c), now);
        }
        app.handle_key(KeyCode::Esc, now);
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('q'), Instant::now()));
    }

    #[test]
    fn test_tab_navigation_clamps() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(KeyCode::Left, now);
        assert_eq!(app.active_tab, Tab::Roadmap);
        for _ in 0..10 {
            app.handle_key(KeyCode::Right, now);
        }
        assert_eq!(app.active_tab, Tab::Pmbok);
    }

    #[test]
    fn test_roadmap_digit_selection() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(KeyCode::Char('2'), now);
        assert_eq!(app.roadmap.details().unwrap().title, "Product Roadmap");
        // Unmapped key leaves the details panel unchanged.
        app.handle_key(KeyCode::Char('x'), now);
        assert_eq!(app.roadmap.details().unwrap().title, "Product Roadmap");
    }

    #[test]
    fn test_add_sprint_announces_and_expires() {
        let mut app = app();
        let now = Instant::now();
        app.active_tab = Tab::Velocity;
        app.handle_key(KeyCode::Char('a'), now);

        assert_eq!(app.velocity.len(), 7);
        let notice = app.notices.for_tab(Tab::Velocity).next().unwrap();
        assert!(notice.text.starts_with("Sprint 7 added with "));
        assert!(notice.text.ends_with(" story points"));

        // Status notices last one second.
        app.on_tick(now + Duration::from_millis(500));
        assert_eq!(app.notices.len(), 1);
        app.on_tick(now + Duration::from_millis(1100));
        assert!(app.notices.is_empty());
    }

    #[test]
    fn test_poker_pick_advances_after_delay() {
        let mut app = app();
        let now = Instant::now();
        app.active_tab = Tab::Poker;
        app.handle_key(KeyCode::Char('4'), now);

        assert_eq!(app.poker.round().unwrap().picked, 5);
        assert_eq!(app.timers.len(), 1);

        app.on_tick(now + Duration::from_millis(4999));
        assert_eq!(app.poker.cursor(), 0);
        app.on_tick(now + Duration::from_millis(5001));
        assert_eq!(app.poker.cursor(), 1);
        assert!(app.poker.round().is_none());
        assert!(app.timers.is_empty());
    }

    #[test]
    fn test_second_pick_keeps_original_deadline() {
        let mut app = app();
        let now = Instant::now();
        app.active_tab = Tab::Poker;
        app.handle_key(KeyCode::Char('1'), now);
        app.handle_key(KeyCode::Char('7'), now + Duration::from_millis(3000));

        // Still one timer, anchored to the first pick.
        assert_eq!(app.timers.len(), 1);
        assert_eq!(app.poker.round().unwrap().picked, 21);

        app.on_tick(now + Duration::from_millis(5001));
        assert_eq!(app.poker.cursor(), 1);
    }

    #[test]
    fn test_empty_submit_shows_one_error_and_never_loads() {
        let mut app = app();
        let now = Instant::now();
        app.active_tab = Tab::Stories;
        app.handle_key(KeyCode::Enter, now);

        assert!(!app.story_gen.is_loading());
        let errors: Vec<_> = app.notices.for_tab(Tab::Stories).collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].text, "Please enter a product vision first.");
        assert_eq!(errors[0].kind, NoticeKind::Error);

        // Error notices last five seconds.
        app.on_tick(now + Duration::from_millis(4900));
        assert_eq!(app.notices.len(), 1);
        app.on_tick(now + Duration::from_millis(5100));
        assert!(app.notices.is_empty());
    }

    #[test]
    fn test_generation_completes_after_latency() {
        let mut app = app();
        let now = Instant::now();
        app.active_tab = Tab::Stories;
        type_text(&mut app, "peer tutoring marketplace", now);
        app.handle_key(KeyCode::Enter, now);

        assert!(app.story_gen.is_loading());
        assert!(app.story_gen.artifact().is_none());

        app.on_tick(now + Duration::from_millis(1999));
        assert!(app.story_gen.is_loading());

        app.on_tick(now + Duration::from_millis(2001));
        assert!(!app.story_gen.is_loading());
        assert!(app.story_gen.artifact().is_some());
        assert!(app.notices.is_empty());
    }

    #[test]
    fn test_release_generation_echoes_goal() {
        let mut app = app();
        let now = Instant::now();
        app.active_tab = Tab::Release;
        type_text(&mut app, "ship the beta", now);
        app.handle_key(KeyCode::Char('g'), now);

        app.on_tick(now + Duration::from_millis(2100));
        match app.release_gen.artifact().unwrap() {
            crate::widgets::Artifact::Release(plan) => assert_eq!(plan.goal, "ship the beta"),
            other => panic!("expected release plan, got {:?}", other),
        }
    }

    #[test]
    fn test_insert_mode_swallows_navigation_keys() {
        let mut app = app();
        let now = Instant::now();
        app.active_tab = Tab::Stories;
        app.handle_key(KeyCode::Char('i'), now);
        assert!(!app.handle_key(KeyCode::Char('q'), now));
        assert_eq!(app.story_gen.input(), "q");
        app.handle_key(KeyCode::Esc, now);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_explainer_toggle() {
        let mut app = app();
        let now = Instant::now();
        app.active_tab = Tab::Pmbok;
        app.handle_key(KeyCode::Char('e'), now);
        assert!(app.explainer.is_visible());
        app.handle_key(KeyCode::Enter, now);
        assert!(!app.explainer.is_visible());
    }
}
