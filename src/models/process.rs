//! Process record model.
//!
//! A process carries immutable input facts (identifier, arrival, burst) and
//! the mutable state a simulation writes while it runs (remaining time,
//! first dispatch, completion and the derived metrics).
//!
//! # Lifecycle
//! Records are built once from input. Every simulation run clones the whole
//! set, resets the clones and mutates only those, so runs never observe
//! each other.

use serde::{Deserialize, Serialize};

use super::Tick;

/// A process to be simulated on the single processor.
///
/// Simulation-derived fields are `None` until the owning run sets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier (uniqueness is checked by validation, not here).
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: Tick,
    /// Total processing ticks required.
    pub burst_time: Tick,
    /// Burst not yet executed. Starts equal to `burst_time`.
    pub remaining_time: Tick,
    /// Tick of the first dispatch onto the processor.
    pub start_time: Option<Tick>,
    /// Tick at which `remaining_time` reached zero.
    pub finish_time: Option<Tick>,
    /// Ticks spent ready but not executing.
    pub waiting_time: Option<Tick>,
    /// Ticks from arrival to completion.
    pub turnaround_time: Option<Tick>,
}

impl Process {
    /// Creates a fresh, unscheduled process.
    pub fn new(id: impl Into<String>, arrival_time: Tick, burst_time: Tick) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            start_time: None,
            finish_time: None,
            waiting_time: None,
            turnaround_time: None,
        }
    }

    /// Restores the pre-simulation state, keeping the input facts.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.start_time = None;
        self.finish_time = None;
        self.waiting_time = None;
        self.turnaround_time = None;
    }

    /// Whether the process has executed its whole burst.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0 && self.finish_time.is_some()
    }

    /// Whether the process has arrived by `now`.
    #[inline]
    pub fn has_arrived(&self, now: Tick) -> bool {
        self.arrival_time <= now
    }

    /// Ticks of burst already executed.
    #[inline]
    pub fn executed_time(&self) -> Tick {
        self.burst_time - self.remaining_time
    }

    /// Delay between arrival and first dispatch.
    pub fn response_time(&self) -> Option<Tick> {
        self.start_time.map(|start| start - self.arrival_time)
    }

    /// Records the first dispatch. Later calls are ignored.
    pub(crate) fn mark_dispatched(&mut self, now: Tick) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
    }

    /// Runs the process for `ticks`, never below zero remaining.
    pub(crate) fn execute(&mut self, ticks: Tick) {
        self.remaining_time = self.remaining_time.saturating_sub(ticks);
    }

    /// Completion with `waiting = turnaround - burst`.
    ///
    /// Used by the preemptive strategies, where a process may wait
    /// several times between slices.
    pub(crate) fn complete_at(&mut self, now: Tick) {
        let turnaround = now - self.arrival_time;
        self.finish_time = Some(now);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
    }

    /// Completion with `waiting = start - arrival`.
    ///
    /// Only valid for a process that ran to completion in a single dispatch.
    pub(crate) fn complete_non_preemptive(&mut self, start: Tick, now: Tick) {
        self.start_time = Some(start);
        self.finish_time = Some(now);
        self.waiting_time = Some(start - self.arrival_time);
        self.turnaround_time = Some(now - self.arrival_time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_process() {
        let p = Process::new("P1", 2, 7);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival_time, 2);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.remaining_time, 7);
        assert!(p.start_time.is_none());
        assert!(!p.is_finished());
    }

    #[test]
    fn test_execute_and_complete() {
        let mut p = Process::new("P1", 1, 4);
        p.mark_dispatched(3);
        p.execute(3);
        assert_eq!(p.remaining_time, 1);
        assert_eq!(p.executed_time(), 3);
        p.execute(5); // saturates
        assert_eq!(p.remaining_time, 0);

        p.complete_at(10);
        assert!(p.is_finished());
        assert_eq!(p.finish_time, Some(10));
        assert_eq!(p.turnaround_time, Some(9));
        assert_eq!(p.waiting_time, Some(5));
        assert_eq!(p.response_time(), Some(2));
    }

    #[test]
    fn test_first_dispatch_sticks() {
        let mut p = Process::new("P1", 0, 4);
        p.mark_dispatched(2);
        p.mark_dispatched(6);
        assert_eq!(p.start_time, Some(2));
    }

    #[test]
    fn test_non_preemptive_formulas_agree() {
        let mut a = Process::new("P1", 3, 5);
        a.execute(5);
        a.complete_non_preemptive(6, 11);

        let mut b = Process::new("P1", 3, 5);
        b.execute(5);
        b.complete_at(11);

        assert_eq!(a.waiting_time, b.waiting_time);
        assert_eq!(a.turnaround_time, b.turnaround_time);
    }

    #[test]
    fn test_reset() {
        let mut p = Process::new("P1", 0, 3);
        p.mark_dispatched(0);
        p.execute(3);
        p.complete_at(3);
        p.reset();
        assert_eq!(p, Process::new("P1", 0, 3));
    }
}
