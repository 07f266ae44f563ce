//! Deadline-based timer queue.
//!
//! All deferred work in pmlab-tui goes through this queue: notice expiry,
//! the estimation-session advance, and simulated generator latency. The
//! event loop drains due entries once per tick and applies them against
//! current application state, so a task never acts on stale captured data.
//!
//! There is no cancellation operation. Once scheduled, every task fires
//! when the loop first observes its deadline passed.

use std::time::{Duration, Instant};

use crate::models::GeneratorKind;

/// A unit of deferred work, applied by the event loop at fire time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Remove the notice with the given id from the board.
    DismissNotice(u64),
    /// Advance the estimation session to its next story prompt.
    AdvanceStory,
    /// Complete a generator's simulated latency and build its artifact.
    FinishGeneration(GeneratorKind),
}

#[derive(Debug)]
struct Scheduled {
    deadline: Instant,
    task: TimerTask,
}

/// Pending deferred work, drained by the event loop each tick.
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<Scheduled>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: TimerTask) {
        self.pending.push(Scheduled {
            deadline: now + delay,
            task,
        });
    }

    /// Remove and return every task whose deadline has passed, in deadline
    /// order. Undue tasks stay queued.
    pub fn drain_due(&mut self, now: Instant) -> Vec<TimerTask> {
        let mut due: Vec<Scheduled> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].deadline <= now {
                due.push(self.pending.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|s| s.deadline);
        due.into_iter().map(|s| s.task).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_due_empty_queue() {
        let mut queue = TimerQueue::new();
        assert!(queue.drain_due(Instant::now()).is_empty());
    }

    #[test]
    fn test_undue_tasks_stay_queued() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(now, Duration::from_millis(100), TimerTask::AdvanceStory);

        assert!(queue.drain_due(now).is_empty());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_due_tasks_fire_once() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(now, Duration::from_millis(50), TimerTask::AdvanceStory);

        let later = now + Duration::from_millis(60);
        assert_eq!(queue.drain_due(later), vec![TimerTask::AdvanceStory]);
        assert!(queue.is_empty());
        assert!(queue.drain_due(later).is_empty());
    }

    #[test]
    fn test_tasks_fire_in_deadline_order() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(now, Duration::from_millis(30), TimerTask::DismissNotice(2));
        queue.schedule(now, Duration::from_millis(10), TimerTask::AdvanceStory);
        queue.schedule(now, Duration::from_millis(20), TimerTask::DismissNotice(1));

        let later = now + Duration::from_millis(40);
        assert_eq!(
            queue.drain_due(later),
            vec![
                TimerTask::AdvanceStory,
                TimerTask::DismissNotice(1),
                TimerTask::DismissNotice(2),
            ]
        );
    }

    #[test]
    fn test_partial_drain_keeps_later_task() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(now, Duration::from_millis(10), TimerTask::DismissNotice(1));
        queue.schedule(now, Duration::from_millis(500), TimerTask::DismissNotice(2));

        let mid = now + Duration::from_millis(20);
        assert_eq!(queue.drain_due(mid), vec![TimerTask::DismissNotice(1)]);
        assert_eq!(queue.len(), 1);
    }
}
