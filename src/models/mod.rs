//! Simulation domain models.
//!
//! Provides the process record and the timeline that every scheduling
//! strategy reads and writes.
//!
//! # Time Representation
//! All times are integer ticks relative to the start of the simulation
//! (t=0). Ticks are unsigned, so a negative arrival can never be built.

mod process;
mod timeline;

pub use process::Process;
pub use timeline::{Slice, Timeline};

/// One unit of simulated time.
pub type Tick = u64;
