//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Walk processes in dispatch order (input order by default).
//! 2. Advance the clock to the process's arrival if the processor is idle.
//! 3. Charge the context-switch cost before every dispatch except the
//!    first, whether or not the process changes.
//! 4. Run the process to completion in a single slice.
//!
//! # Complexity
//! O(n), or O(n log n) with [`FcfsOrder::ArrivalTime`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Algorithm, Scheduler};
use crate::models::{Process, Tick, Timeline};

/// Order in which FCFS dispatches processes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FcfsOrder {
    /// Exactly as supplied. Callers pre-sort for arrival semantics.
    #[default]
    InputOrder,
    /// Stable sort by arrival time; ties keep input order.
    ArrivalTime,
}

/// Non-preemptive First-Come-First-Served scheduler.
#[derive(Debug, Clone, Default)]
pub struct Fcfs {
    context_switch: Tick,
    order: FcfsOrder,
}

impl Fcfs {
    /// Creates an FCFS scheduler dispatching in input order.
    pub fn new(context_switch: Tick) -> Self {
        Self {
            context_switch,
            order: FcfsOrder::InputOrder,
        }
    }

    /// Sets the dispatch order.
    pub fn with_order(mut self, order: FcfsOrder) -> Self {
        self.order = order;
        self
    }

    fn dispatch_order(&self, processes: &[Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        if self.order == FcfsOrder::ArrivalTime {
            indices.sort_by_key(|&i| processes[i].arrival_time);
        }
        indices
    }
}

impl Scheduler for Fcfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn context_switch(&self) -> Tick {
        self.context_switch
    }

    fn schedule(&self, processes: &mut [Process], timeline: &mut Timeline) -> Tick {
        let mut now: Tick = 0;

        for index in self.dispatch_order(processes) {
            let process = &mut processes[index];
            now = now.max(process.arrival_time);
            if !timeline.is_empty() {
                now += self.context_switch;
            }

            let start = now;
            now += process.burst_time;
            timeline.record(&process.id, start, now);
            process.execute(process.burst_time);
            process.complete_non_preemptive(start, now);

            debug!(process = %process.id, start, end = now, "dispatched to completion");
        }

        now
    }
}
