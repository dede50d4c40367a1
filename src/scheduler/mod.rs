//! Single-processor scheduling strategies and run metrics.
//!
//! Provides three strategies behind one [`Scheduler`] contract:
//!
//! | Strategy | Preemption | Selection | Context switch charged |
//! |----------|-----------|-----------|------------------------|
//! | [`Fcfs`] | none | input order | before every dispatch but the first |
//! | [`Srt`] | every tick | least remaining time | when the process changes |
//! | [`RoundRobin`] | quantum expiry | FIFO queue | when the process changes |
//!
//! # Isolation
//!
//! [`Scheduler::simulate`] clones the input records before mutating them,
//! so several strategies can run over the same slice (even on different
//! threads) without observing each other.
//!
//! # KPI
//!
//! [`RunKpi`] derives averages and overhead figures from a finished
//! [`SimulationRun`].

mod fcfs;
mod kpi;
mod round_robin;
mod run;
mod srt;

pub use fcfs::{Fcfs, FcfsOrder};
pub use kpi::RunKpi;
pub use round_robin::RoundRobin;
pub use run::{cpu_utilization, SimulationRun};
pub use srt::Srt;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::config::SimulationConfig;
use crate::error::{Result, SimError};
use crate::models::{Process, Tick, Timeline};
use crate::validation::{validate_processes, validate_time_horizon};

/// Identifies a scheduling strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest Remaining Time (preemptive).
    Srt,
    /// Round-Robin with a fixed quantum.
    RoundRobin,
}

impl Algorithm {
    /// All strategies, in reporting order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Fcfs, Algorithm::Srt, Algorithm::RoundRobin];

    /// Short display name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Srt => "SRT",
            Self::RoundRobin => "RR",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "srt" | "srtf" => Ok(Self::Srt),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            other => Err(SimError::invalid_config(format!(
                "unknown algorithm '{other}'. Valid: fcfs, srt, rr"
            ))),
        }
    }
}

/// A single-processor scheduling strategy.
///
/// Implementors only provide [`schedule`](Scheduler::schedule), which runs
/// over a working copy the caller owns. [`simulate`](Scheduler::simulate)
/// takes care of copying and of deriving the run's metrics.
pub trait Scheduler: Send + Sync + fmt::Debug {
    /// Which strategy this is.
    fn algorithm(&self) -> Algorithm;

    /// Ticks charged per context switch.
    fn context_switch(&self) -> Tick;

    /// Simulates every process in `processes` to completion.
    ///
    /// Appends one slice per dispatch to `timeline` and returns the final
    /// clock value. Expects fresh, validated records.
    fn schedule(&self, processes: &mut [Process], timeline: &mut Timeline) -> Tick;

    /// Runs the strategy on a private copy of `processes`.
    ///
    /// The copies are reset first, so records left over from an earlier run
    /// are simulated from their input facts.
    fn simulate(&self, processes: &[Process]) -> SimulationRun {
        let algorithm = self.algorithm();
        let span = tracing::debug_span!("simulate", %algorithm, processes = processes.len());
        let _guard = span.enter();

        if processes.is_empty() {
            warn!(%algorithm, "simulating an empty process set");
        }

        let mut working = processes.to_vec();
        working.iter_mut().for_each(Process::reset);
        let mut timeline = Timeline::new();
        let final_time = self.schedule(&mut working, &mut timeline);
        SimulationRun::new(
            algorithm,
            self.context_switch(),
            timeline,
            working,
            final_time,
        )
    }
}

/// Builds the strategy for `algorithm` from a configuration.
pub fn build_scheduler(
    algorithm: Algorithm,
    config: &SimulationConfig,
) -> Result<Box<dyn Scheduler>> {
    let scheduler: Box<dyn Scheduler> = match algorithm {
        Algorithm::Fcfs => {
            Box::new(Fcfs::new(config.context_switch).with_order(config.fcfs_order))
        }
        Algorithm::Srt => Box::new(Srt::new(config.context_switch)),
        Algorithm::RoundRobin => {
            Box::new(RoundRobin::new(config.quantum, config.context_switch)?)
        }
    };
    Ok(scheduler)
}

/// Validates the input, then runs each requested strategy independently.
///
/// Runs come back in the order of `algorithms`.
pub fn simulate(
    processes: &[Process],
    config: &SimulationConfig,
    algorithms: &[Algorithm],
) -> Result<Vec<SimulationRun>> {
    config.validate()?;
    validate_processes(processes)
        .and_then(|()| validate_time_horizon(processes, config.context_switch))
        .map_err(SimError::Validation)?;

    let mut runs = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        let scheduler = build_scheduler(algorithm, config)?;
        let run = scheduler.simulate(processes);
        info!(
            %algorithm,
            slices = run.timeline.len(),
            final_time = run.final_time,
            cpu_utilization = run.cpu_utilization,
            "simulation finished"
        );
        runs.push(run);
    }
    Ok(runs)
}

/// Runs all three strategies, in [`Algorithm::ALL`] order.
pub fn simulate_all(
    processes: &[Process],
    config: &SimulationConfig,
) -> Result<Vec<SimulationRun>> {
    simulate(processes, config, &Algorithm::ALL)
}

/// Moves every pending process that has arrived by `now` into `ready`,
/// preserving input order.
fn admit_arrivals<E: Extend<usize>>(
    pending: &mut Vec<usize>,
    processes: &[Process],
    now: Tick,
    ready: &mut E,
) {
    let mut arrived = Vec::new();
    pending.retain(|&index| {
        if processes[index].has_arrived(now) {
            arrived.push(index);
            false
        } else {
            true
        }
    });
    for &index in &arrived {
        debug!(process = %processes[index].id, now, "admitted");
    }
    ready.extend(arrived);
}

/// Earliest arrival among pending processes.
fn next_arrival(pending: &[usize], processes: &[Process]) -> Option<Tick> {
    pending.iter().map(|&i| processes[i].arrival_time).min()
}

/// Cost of dispatching `next_id` given what ran last.
///
/// Nothing is charged for the first dispatch or for re-dispatching the
/// process that held the processor in the previous slice.
fn switch_cost(timeline: &Timeline, next_id: &str, context_switch: Tick) -> Tick {
    match timeline.last_process_id() {
        Some(prev) if prev != next_id => {
            debug!(from = prev, to = next_id, cost = context_switch, "context switch");
            context_switch
        }
        _ => 0,
    }
}
