//! Planning-poker estimation session state.
//!
//! A cursor wraps over five fixed story prompts. Picking a card samples a
//! simulated team estimate from the same scale and records the round
//! result; five seconds after the first pick of a round the session
//! advances to the next story. The advance timer is anchored to that
//! first pick and is never reset: picking again during the pending window
//! replaces the displayed result but leaves the countdown untouched.

use rand::Rng;

use crate::models::knowledge::{ESTIMATE_SCALE, STORY_PROMPTS};
use crate::utils::sample_estimate;

/// Outcome of one card pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    /// The value the user picked.
    pub picked: u32,
    /// The simulated team estimate.
    pub team: u32,
}

impl Round {
    pub fn consensus(&self) -> bool {
        self.picked == self.team
    }
}

pub struct EstimationSession {
    /// Index into the fixed story prompts, wrapping modulo their count.
    cursor: usize,
    /// Index of the sole highlighted card, if any.
    selected_card: Option<usize>,
    /// Result of the most recent pick this round.
    round: Option<Round>,
    /// Whether an advance timer is already queued for this round.
    /// Invariant: at most one advance is ever pending.
    advance_pending: bool,
}

impl EstimationSession {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            selected_card: None,
            round: None,
            advance_pending: false,
        }
    }

    /// The story prompt under estimation.
    pub fn story(&self) -> &'static str {
        STORY_PROMPTS[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_card(&self) -> Option<usize> {
        self.selected_card
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn advance_pending(&self) -> bool {
        self.advance_pending
    }

    /// Pick the card at `card` (an index into the fixed scale). Samples
    /// the team estimate, records the round, and highlights the card.
    ///
    /// Returns true when this pick starts a round, meaning the caller must
    /// schedule the advance timer. A pick during an already-pending round
    /// returns false: the running timer keeps its original deadline.
    pub fn pick<R: Rng>(&mut self, card: usize, rng: &mut R) -> bool {
        if card >= ESTIMATE_SCALE.len() {
            return false;
        }
        self.selected_card = Some(card);
        self.round = Some(Round {
            picked: ESTIMATE_SCALE[card],
            team: sample_estimate(rng),
        });
        if self.advance_pending {
            false
        } else {
            self.advance_pending = true;
            true
        }
    }

    /// Move to the next story, clearing the round's transient state. Fired
    /// by the advance timer.
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % STORY_PROMPTS.len();
        self.selected_card = None;
        self.round = None;
        self.advance_pending = false;
    }
}

impl Default for EstimationSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_initial_state() {
        let session = EstimationSession::new();
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.story(), STORY_PROMPTS[0]);
        assert!(session.selected_card().is_none());
        assert!(session.round().is_none());
        assert!(!session.advance_pending());
    }

    #[test]
    fn test_consensus_iff_values_equal() {
        for &picked in &ESTIMATE_SCALE {
            for &team in &ESTIMATE_SCALE {
                let round = Round { picked, team };
                assert_eq!(round.consensus(), picked == team);
            }
        }
    }

    #[test]
    fn test_pick_records_round_and_selection() {
        let mut session = EstimationSession::new();
        let mut rng = StdRng::seed_from_u64(11);
        let started = session.pick(3, &mut rng);
        assert!(started);
        assert_eq!(session.selected_card(), Some(3));
        let round = session.round().unwrap();
        assert_eq!(round.picked, 5);
        assert!(ESTIMATE_SCALE.contains(&round.team));
        assert!(session.advance_pending());
    }

    #[test]
    fn test_second_pick_does_not_start_new_round() {
        let mut session = EstimationSession::new();
        let mut rng = StdRng::seed_from_u64(12);
        assert!(session.pick(0, &mut rng));
        assert!(!session.pick(6, &mut rng));
        // The display reflects the latest pick.
        assert_eq!(session.selected_card(), Some(6));
        assert_eq!(session.round().unwrap().picked, 21);
        assert!(session.advance_pending());
    }

    #[test]
    fn test_out_of_range_pick_is_noop() {
        let mut session = EstimationSession::new();
        let mut rng = StdRng::seed_from_u64(13);
        assert!(!session.pick(ESTIMATE_SCALE.len(), &mut rng));
        assert!(session.selected_card().is_none());
        assert!(!session.advance_pending());
    }

    #[test]
    fn test_advance_clears_transient_state() {
        let mut session = EstimationSession::new();
        let mut rng = StdRng::seed_from_u64(14);
        session.pick(2, &mut rng);
        session.advance();
        assert_eq!(session.cursor(), 1);
        assert!(session.selected_card().is_none());
        assert!(session.round().is_none());
        assert!(!session.advance_pending());
    }

    #[test]
    fn test_cursor_wraps_modulo_story_count() {
        let mut session = EstimationSession::new();
        for k in 1..=23 {
            session.advance();
            assert_eq!(session.cursor(), k % STORY_PROMPTS.len());
            assert!(session.cursor() < STORY_PROMPTS.len());
        }
    }

    #[test]
    fn test_pick_after_advance_starts_fresh_round() {
        let mut session = EstimationSession::new();
        let mut rng = StdRng::seed_from_u64(15);
        session.pick(1, &mut rng);
        session.advance();
        assert!(session.pick(4, &mut rng));
    }
}
