//! Staggered tail moves
//!
//! Each tick the head takes a step and every tail segment gets its own copy
//! of that step, due `(index + 1)` tick intervals later. The moves are
//! independent: segments do not track each other, they replay the head's
//! delta on a delay. Pending moves live here until their due time or until
//! the schedule is cleared by a restart.

use serde::{Deserialize, Serialize};

use super::snake::TailMove;

/// A tail move waiting for its due time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledMove {
    /// Virtual clock time (ms) at which the move applies
    pub due_ms: u64,
    pub segment: usize,
    pub action: TailMove,
}

/// Pending tail moves ordered by due time, then by scheduling order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TailSchedule {
    pending: Vec<ScheduledMove>,
}

impl TailSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` for `segment` at `due_ms`
    pub fn schedule(&mut self, due_ms: u64, segment: usize, action: TailMove) {
        // Insert after every move due at or before this one so equal due
        // times keep the order they were scheduled in.
        let at = self.pending.partition_point(|m| m.due_ms <= due_ms);
        self.pending.insert(
            at,
            ScheduledMove {
                due_ms,
                segment,
                action,
            },
        );
    }

    /// Schedule one move per segment, staggered by `interval_ms` from `now_ms`
    pub fn stagger(&mut self, now_ms: u64, interval_ms: u64, segments: usize, action: TailMove) {
        for i in 0..segments {
            let delay = (i as u64 + 1).saturating_mul(interval_ms);
            self.schedule(now_ms.saturating_add(delay), i, action);
        }
    }

    /// Remove and return every move due at or before `now_ms`, in order
    pub fn drain_due(&mut self, now_ms: u64) -> impl Iterator<Item = ScheduledMove> + '_ {
        let end = self.pending.partition_point(|m| m.due_ms <= now_ms);
        self.pending.drain(..end)
    }

    /// Discard every pending move
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[cfg(test)]
    fn iter(&self) -> impl Iterator<Item = &ScheduledMove> {
        self.pending.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::Command;

    #[test]
    fn test_stagger_due_times() {
        let mut schedule = TailSchedule::new();
        schedule.stagger(200, 100, 3, TailMove::Step(Command::Right));
        let due: Vec<_> = schedule.iter().map(|m| (m.segment, m.due_ms)).collect();
        assert_eq!(due, vec![(0, 300), (1, 400), (2, 500)]);
    }

    #[test]
    fn test_drain_due_only_takes_ready() {
        let mut schedule = TailSchedule::new();
        schedule.stagger(0, 100, 3, TailMove::Step(Command::Down));

        assert_eq!(schedule.drain_due(99).count(), 0);
        let ready: Vec<_> = schedule.drain_due(200).map(|m| m.segment).collect();
        assert_eq!(ready, vec![0, 1]);
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_equal_due_keeps_schedule_order() {
        let mut schedule = TailSchedule::new();
        // Tick at t=0 schedules segment 1 at 200; tick at t=100 schedules segment 0 at 200
        schedule.stagger(0, 100, 2, TailMove::Step(Command::Up));
        schedule.stagger(100, 100, 1, TailMove::Step(Command::Left));

        let at_200: Vec<_> = schedule
            .drain_due(200)
            .filter(|m| m.due_ms == 200)
            .map(|m| (m.segment, m.action))
            .collect();
        assert_eq!(
            at_200,
            vec![
                (1, TailMove::Step(Command::Up)),
                (0, TailMove::Step(Command::Left)),
            ]
        );
    }

    #[test]
    fn test_stagger_saturates_far_due_times() {
        let mut schedule = TailSchedule::new();
        schedule.stagger(u64::MAX - 150, 100, 3, TailMove::Step(Command::Right));
        let due: Vec<_> = schedule.iter().map(|m| m.due_ms).collect();
        assert_eq!(due, vec![u64::MAX - 50, u64::MAX, u64::MAX]);
        let order: Vec<_> = schedule.iter().map(|m| m.segment).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_clear() {
        let mut schedule = TailSchedule::new();
        schedule.stagger(0, 100, 4, TailMove::Step(Command::Up));
        assert!(!schedule.is_empty());
        schedule.clear();
        assert!(schedule.is_empty());
        assert_eq!(schedule.drain_due(u64::MAX).count(), 0);
    }
}
