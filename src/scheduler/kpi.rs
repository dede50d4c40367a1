//! Run quality metrics (KPIs).
//!
//! Summarises a finished [`SimulationRun`] into the figures usually
//! reported next to a Gantt chart.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Final clock value |
//! | Avg Waiting | Mean time ready but not running |
//! | Avg Turnaround | Mean of finish − arrival |
//! | Avg Response | Mean of first dispatch − arrival |
//! | Idle | Ticks waiting for the next arrival |
//! | Switch Time | Context switches paid × switch cost |
//! | Overhead | Idle + switch time |
//! | Context Switches | Switches the strategy paid for |
//! | Process Changes | Adjacent slices with different process IDs |
//! | CPU Utilization | 100 × completed burst / makespan |

use serde::{Deserialize, Serialize};

use super::SimulationRun;
use crate::models::Tick;

/// Performance indicators of one run. Times are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunKpi {
    /// Final clock value.
    pub makespan: Tick,
    /// Mean waiting time over completed processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time over completed processes.
    pub avg_turnaround_time: f64,
    /// Mean response time over dispatched processes.
    pub avg_response_time: f64,
    /// Ticks with nothing ready to run.
    pub idle_time: Tick,
    /// Ticks spent on context switches.
    pub switch_time: Tick,
    /// Ticks spent idle or switching.
    pub overhead_time: Tick,
    /// Number of context switches paid for.
    pub context_switches: usize,
    /// Number of transitions between different processes.
    pub process_changes: usize,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Productive share of the makespan, in percent.
    pub cpu_utilization: f64,
}

impl RunKpi {
    /// Computes KPIs from a finished run.
    pub fn calculate(run: &SimulationRun) -> Self {
        // Per-process times fit in a tick; their sums may not.
        let mut total_waiting: u128 = 0;
        let mut total_turnaround: u128 = 0;
        let mut completed: usize = 0;
        let mut total_response: u128 = 0;
        let mut dispatched: usize = 0;

        for p in &run.processes {
            if let (Some(waiting), Some(turnaround)) = (p.waiting_time, p.turnaround_time) {
                total_waiting += u128::from(waiting);
                total_turnaround += u128::from(turnaround);
                completed += 1;
            }
            if let Some(response) = p.response_time() {
                total_response += u128::from(response);
                dispatched += 1;
            }
        }

        let throughput = if run.final_time == 0 {
            0.0
        } else {
            completed as f64 / run.final_time as f64
        };

        Self {
            makespan: run.final_time,
            avg_waiting_time: mean(total_waiting, completed),
            avg_turnaround_time: mean(total_turnaround, completed),
            avg_response_time: mean(total_response, dispatched),
            idle_time: run.idle_time(),
            switch_time: run.switch_time(),
            overhead_time: run.final_time.saturating_sub(run.timeline.busy_time()),
            context_switches: run.switches_charged(),
            process_changes: run.timeline.context_switches(),
            throughput,
            cpu_utilization: run.cpu_utilization,
        }
    }
}

fn mean(total: u128, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{Fcfs, RoundRobin, Scheduler, Srt};

    #[test]
    fn test_kpi_round_robin() {
        let processes = vec![Process::new("P1", 0, 4), Process::new("P2", 0, 4)];
        let run = RoundRobin::new(2, 1).unwrap().simulate(&processes);
        let kpi = RunKpi::calculate(&run);

        assert_eq!(kpi.makespan, 11);
        // waiting 4 and 7
        assert!((kpi.avg_waiting_time - 5.5).abs() < 1e-10);
        assert!((kpi.avg_turnaround_time - 9.5).abs() < 1e-10);
        // response 0 and 3
        assert!((kpi.avg_response_time - 1.5).abs() < 1e-10);
        assert_eq!(kpi.overhead_time, 3);
        assert_eq!(kpi.switch_time, 3);
        assert_eq!(kpi.idle_time, 0);
        assert_eq!(kpi.context_switches, 3);
        assert_eq!(kpi.process_changes, 3);
        assert!((kpi.cpu_utilization - 800.0 / 11.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_idle_counts_as_overhead() {
        let processes = vec![Process::new("P1", 0, 3), Process::new("P2", 5, 2)];
        let kpi = RunKpi::calculate(&Fcfs::new(0).simulate(&processes));
        assert_eq!(kpi.makespan, 7);
        assert_eq!(kpi.overhead_time, 2);
        assert_eq!(kpi.idle_time, 2);
        assert_eq!(kpi.switch_time, 0);
        assert!((kpi.throughput - 2.0 / 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_srt_response() {
        let processes = vec![Process::new("P1", 0, 8), Process::new("P2", 1, 4)];
        let kpi = RunKpi::calculate(&Srt::new(0).simulate(&processes));
        // Both dispatched on arrival.
        assert_eq!(kpi.avg_response_time, 0.0);
        assert_eq!(kpi.process_changes, 2);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = RunKpi::calculate(&Srt::new(1).simulate(&[]));
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.avg_waiting_time, 0.0);
        assert_eq!(kpi.throughput, 0.0);
        assert_eq!(kpi.cpu_utilization, 0.0);
    }

    #[test]
    fn test_kpi_splits_idle_and_switch_time() {
        // P1[0-3], jump to 5, switch 2, P2[7-9]
        let processes = vec![Process::new("P1", 0, 3), Process::new("P2", 5, 2)];
        let kpi = RunKpi::calculate(&Fcfs::new(2).simulate(&processes));
        assert_eq!(kpi.makespan, 9);
        assert_eq!(kpi.idle_time, 2);
        assert_eq!(kpi.switch_time, 2);
        assert_eq!(kpi.overhead_time, 4);
        assert_eq!(kpi.context_switches, 1);
    }

    #[test]
    fn test_kpi_fcfs_counts_same_id_switch() {
        let processes = vec![Process::new("P1", 0, 2), Process::new("P1", 0, 2)];
        let kpi = RunKpi::calculate(&Fcfs::new(1).simulate(&processes));
        assert_eq!(kpi.context_switches, 1);
        assert_eq!(kpi.process_changes, 0);
        assert_eq!(kpi.switch_time, 1);
        assert_eq!(kpi.idle_time, 0);
    }

    #[test]
    fn test_kpi_averages_near_tick_limit() {
        let half = Tick::MAX / 2;
        let processes = vec![Process::new("P1", 0, half), Process::new("P2", 0, half)];
        let kpi = RunKpi::calculate(&Fcfs::new(0).simulate(&processes));
        // turnarounds half and 2 * half
        let expected = 1.5 * half as f64;
        assert!((kpi.avg_turnaround_time - expected).abs() / expected < 1e-12);
    }
}
