//! Shortest-Remaining-Time scheduling.
//!
//! # Algorithm
//!
//! Decisions are made at every tick boundary:
//!
//! 1. Admit every process that has arrived by the current tick, appending
//!    to the ready set in input order.
//! 2. If nothing is ready, jump the clock to the next arrival.
//! 3. Stable-sort the ready set by remaining time, so equal remaining times
//!    keep their order in the ready set.
//! 4. Charge the context-switch cost if the head differs from the process
//!    in the last slice.
//! 5. Run the head for exactly one tick.
//! 6. Retire it when its remaining time reaches zero.
//!
//! Each tick is its own slice; use [`Timeline::coalesced`] to read the
//! result as dispatch runs.
//!
//! # Complexity
//! O(B · r log r) where B = total burst and r = ready set size.

use tracing::debug;

use super::{admit_arrivals, next_arrival, switch_cost, Algorithm, Scheduler};
use crate::models::{Process, Tick, Timeline};

/// Preemptive Shortest-Remaining-Time scheduler with tick granularity.
#[derive(Debug, Clone, Default)]
pub struct Srt {
    context_switch: Tick,
}

impl Srt {
    /// Creates an SRT scheduler.
    pub fn new(context_switch: Tick) -> Self {
        Self { context_switch }
    }
}

impl Scheduler for Srt {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Srt
    }

    fn context_switch(&self) -> Tick {
        self.context_switch
    }

    fn schedule(&self, processes: &mut [Process], timeline: &mut Timeline) -> Tick {
        let mut now: Tick = 0;
        let mut pending: Vec<usize> = (0..processes.len()).collect();
        let mut ready: Vec<usize> = Vec::new();

        while !pending.is_empty() || !ready.is_empty() {
            admit_arrivals(&mut pending, processes, now, &mut ready);

            if ready.is_empty() {
                if let Some(next) = next_arrival(&pending, processes) {
                    debug!(from = now, to = next, "processor idle");
                    now = next;
                }
                continue;
            }

            ready.sort_by_key(|&i| processes[i].remaining_time);

            let process = &mut processes[ready[0]];
            now += switch_cost(timeline, &process.id, self.context_switch);
            process.mark_dispatched(now);
            timeline.record(&process.id, now, now + 1);
            now += 1;
            process.execute(1);

            if process.remaining_time == 0 {
                process.complete_at(now);
                debug!(process = %process.id, finish = now, "completed");
                ready.remove(0);
            }
        }

        now
    }
}
