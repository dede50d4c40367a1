//! Simulation configuration.
//!
//! The two scalars every workload supplies alongside its processes
//! (the Round-Robin quantum and the context-switch cost), plus the FCFS
//! dispatch order chosen by the caller.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::models::Tick;
use crate::scheduler::FcfsOrder;

/// Default Round-Robin quantum in ticks.
pub const DEFAULT_QUANTUM: Tick = 4;

/// Scalars shared by all strategies of one simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Maximum uninterrupted run length under Round-Robin. Must be positive.
    pub quantum: Tick,
    /// Ticks charged when the processor changes process.
    #[serde(default)]
    pub context_switch: Tick,
    /// Dispatch order used by FCFS.
    #[serde(default)]
    pub fcfs_order: FcfsOrder,
}

impl SimulationConfig {
    /// Creates a configuration.
    pub fn new(quantum: Tick, context_switch: Tick) -> Self {
        Self {
            quantum,
            context_switch,
            fcfs_order: FcfsOrder::default(),
        }
    }

    /// Sets the quantum.
    pub fn with_quantum(mut self, quantum: Tick) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the context-switch cost.
    pub fn with_context_switch(mut self, context_switch: Tick) -> Self {
        self.context_switch = context_switch;
        self
    }

    /// Sets the FCFS dispatch order.
    pub fn with_fcfs_order(mut self, order: FcfsOrder) -> Self {
        self.fcfs_order = order;
        self
    }

    /// Rejects values the simulator cannot run with.
    ///
    /// A zero quantum would make Round-Robin dispatch empty slices forever.
    pub fn validate(&self) -> Result<()> {
        if self.quantum == 0 {
            return Err(SimError::invalid_config("quantum must be positive"));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM, 0)
    }
}
