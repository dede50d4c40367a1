//! Output of one simulation run.

use serde::{Deserialize, Serialize};

use super::Algorithm;
use crate::models::{Process, Tick, Timeline};

/// Everything one strategy produced for one process set.
///
/// `processes` keeps input order and holds the final state of the run's
/// private copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Strategy that produced this run.
    pub algorithm: Algorithm,
    /// Ticks charged per context switch.
    pub context_switch: Tick,
    /// Execution slices in dispatch order.
    pub timeline: Timeline,
    /// Final process records.
    pub processes: Vec<Process>,
    /// Clock value when the last process finished.
    pub final_time: Tick,
    /// Productive share of the elapsed time, in percent.
    pub cpu_utilization: f64,
}

impl SimulationRun {
    pub(crate) fn new(
        algorithm: Algorithm,
        context_switch: Tick,
        timeline: Timeline,
        processes: Vec<Process>,
        final_time: Tick,
    ) -> Self {
        let completed_burst: Tick = processes
            .iter()
            .filter(|p| p.is_finished())
            .map(|p| p.burst_time)
            .sum();
        Self {
            algorithm,
            context_switch,
            timeline,
            processes,
            final_time,
            cpu_utilization: cpu_utilization(completed_burst, final_time),
        }
    }

    /// Final record for a process.
    pub fn process(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Number of processes that ran to completion.
    pub fn completed_count(&self) -> usize {
        self.processes.iter().filter(|p| p.is_finished()).count()
    }

    /// Number of context switches the strategy paid for.
    ///
    /// FCFS pays before every dispatch but the first; the preemptive
    /// strategies only when the process changes.
    pub fn switches_charged(&self) -> usize {
        match self.algorithm {
            Algorithm::Fcfs => self.timeline.len().saturating_sub(1),
            Algorithm::Srt | Algorithm::RoundRobin => self.timeline.context_switches(),
        }
    }

    /// Ticks spent switching between processes.
    pub fn switch_time(&self) -> Tick {
        self.switches_charged() as Tick * self.context_switch
    }

    /// Ticks the processor sat idle waiting for arrivals.
    pub fn idle_time(&self) -> Tick {
        self.final_time
            .saturating_sub(self.timeline.busy_time())
            .saturating_sub(self.switch_time())
    }
}

/// `100 × useful / elapsed`, or 0 when no time elapsed.
pub fn cpu_utilization(useful: Tick, elapsed: Tick) -> f64 {
    if elapsed == 0 {
        return 0.0;
    }
    100.0 * useful as f64 / elapsed as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_utilization() {
        assert_eq!(cpu_utilization(0, 0), 0.0);
        assert!((cpu_utilization(5, 5) - 100.0).abs() < 1e-10);
        assert!((cpu_utilization(8, 11) - 72.727_272_727).abs() < 1e-6);
    }

    #[test]
    fn test_unfinished_burst_not_counted() {
        let mut done = Process::new("P1", 0, 2);
        done.execute(2);
        done.complete_at(2);
        let waiting = Process::new("P2", 0, 6);

        let mut timeline = Timeline::new();
        timeline.record("P1", 0, 2);
        let run = SimulationRun::new(Algorithm::Fcfs, 0, timeline, vec![done, waiting], 4);

        assert!((run.cpu_utilization - 50.0).abs() < 1e-10);
        assert_eq!(run.completed_count(), 1);
        assert_eq!(run.process("P2").map(|p| p.remaining_time), Some(6));
        assert!(run.process("P9").is_none());
    }

    #[test]
    fn test_switch_and_idle_time() {
        // FCFS pays even when the same ID is dispatched twice.
        let mut timeline = Timeline::new();
        timeline.record("P1", 0, 2);
        timeline.record("P1", 3, 5);
        timeline.record("P2", 8, 9);
        let fcfs = SimulationRun::new(Algorithm::Fcfs, 1, timeline.clone(), Vec::new(), 9);
        assert_eq!(fcfs.switches_charged(), 2);
        assert_eq!(fcfs.switch_time(), 2);
        assert_eq!(fcfs.idle_time(), 2);

        let mut timeline = Timeline::new();
        timeline.record("P1", 0, 2);
        timeline.record("P1", 2, 4);
        timeline.record("P2", 5, 6);
        let rr = SimulationRun::new(Algorithm::RoundRobin, 1, timeline, Vec::new(), 6);
        assert_eq!(rr.switches_charged(), 1);
        assert_eq!(rr.switch_time(), 1);
        assert_eq!(rr.idle_time(), 0);
    }
}
