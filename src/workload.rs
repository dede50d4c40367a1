//! Random workload generation.
//!
//! Produces well-formed process sets for demos and property checks.
//! Generation is driven by a caller-supplied RNG so seeded runs are
//! reproducible.

use rand::Rng;

use crate::config::SimulationConfig;
use crate::loader::Workload;
use crate::models::{Process, Tick};

/// Shape of generated workloads.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Largest arrival tick (inclusive).
    pub max_arrival: Tick,
    /// Largest burst (inclusive). Bursts are at least 1.
    pub max_burst: Tick,
    /// Largest quantum (inclusive). Quanta are at least 1.
    pub max_quantum: Tick,
    /// Largest context-switch cost (inclusive).
    pub max_context_switch: Tick,
    /// Sort processes by arrival before returning them.
    pub sorted_by_arrival: bool,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with small default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            max_burst: 10,
            max_quantum: 5,
            max_context_switch: 2,
            sorted_by_arrival: false,
        }
    }

    /// Sets the largest arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: Tick) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the largest burst.
    pub fn with_max_burst(mut self, max_burst: Tick) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Sets the largest quantum.
    pub fn with_max_quantum(mut self, max_quantum: Tick) -> Self {
        self.max_quantum = max_quantum.max(1);
        self
    }

    /// Sets the largest context-switch cost.
    pub fn with_max_context_switch(mut self, max_context_switch: Tick) -> Self {
        self.max_context_switch = max_context_switch;
        self
    }

    /// Returns processes in arrival order instead of generation order.
    pub fn sorted_by_arrival(mut self, sorted: bool) -> Self {
        self.sorted_by_arrival = sorted;
        self
    }

    /// Generates processes named `P1..Pn`.
    pub fn processes<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let mut processes: Vec<Process> = (1..=self.count)
            .map(|n| {
                Process::new(
                    format!("P{n}"),
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(1..=self.max_burst.max(1)),
                )
            })
            .collect();
        if self.sorted_by_arrival {
            processes.sort_by_key(|p| p.arrival_time);
        }
        processes
    }

    /// Generates a full workload including its configuration.
    pub fn workload<R: Rng>(&self, rng: &mut R) -> Workload {
        let config = SimulationConfig::new(
            rng.random_range(1..=self.max_quantum.max(1)),
            rng.random_range(0..=self.max_context_switch),
        );
        Workload::new(config, self.processes(rng))
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(5)
    }
}
