//! Round-Robin scheduling.
//!
//! # Algorithm
//!
//! 1. Enqueue every process that has arrived by the current tick, in
//!    input order.
//! 2. If the queue is empty, jump the clock to the next arrival.
//! 3. Dequeue the head; charge the context-switch cost if it differs from
//!    the process in the last slice.
//! 4. Run it for `min(remaining, quantum)` ticks.
//! 5. If work remains, first enqueue everything that arrived during the
//!    slice, then re-enqueue the preempted process behind them.
//! 6. Otherwise retire it.

use std::collections::VecDeque;
use tracing::debug;

use super::{admit_arrivals, next_arrival, switch_cost, Algorithm, Scheduler};
use crate::error::{Result, SimError};
use crate::models::{Process, Tick, Timeline};

/// Preemptive Round-Robin scheduler with a fixed quantum.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: Tick,
    context_switch: Tick,
}

impl RoundRobin {
    /// Creates a Round-Robin scheduler.
    ///
    /// # Errors
    /// Returns [`SimError::InvalidConfig`] for a zero quantum.
    pub fn new(quantum: Tick, context_switch: Tick) -> Result<Self> {
        if quantum == 0 {
            return Err(SimError::invalid_config("round-robin quantum must be positive"));
        }
        Ok(Self {
            quantum,
            context_switch,
        })
    }

    /// Maximum slice length.
    pub fn quantum(&self) -> Tick {
        self.quantum
    }
}

impl Scheduler for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn context_switch(&self) -> Tick {
        self.context_switch
    }

    fn schedule(&self, processes: &mut [Process], timeline: &mut Timeline) -> Tick {
        let mut now: Tick = 0;
        let mut pending: Vec<usize> = (0..processes.len()).collect();
        let mut queue: VecDeque<usize> = VecDeque::new();

        while !pending.is_empty() || !queue.is_empty() {
            admit_arrivals(&mut pending, processes, now, &mut queue);

            let Some(index) = queue.pop_front() else {
                if let Some(next) = next_arrival(&pending, processes) {
                    debug!(from = now, to = next, "processor idle");
                    now = next;
                }
                continue;
            };

            let process = &mut processes[index];
            now += switch_cost(timeline, &process.id, self.context_switch);
            process.mark_dispatched(now);

            let run = process.remaining_time.min(self.quantum);
            timeline.record(&process.id, now, now + run);
            now += run;
            process.execute(run);

            let finished = process.remaining_time == 0;
            if finished {
                process.complete_at(now);
                debug!(process = %process.id, finish = now, "completed");
            } else {
                admit_arrivals(&mut pending, processes, now, &mut queue);
                queue.push_back(index);
            }
        }

        now
    }
}
