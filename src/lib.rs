//! Single-processor CPU scheduling simulator.
//!
//! Replays a fixed, pre-loaded set of processes under three classical
//! disciplines and reports the resulting Gantt timeline together with
//! per-process waiting/turnaround times and CPU utilization.
//!
//! # Modules
//!
//! - **`models`**: `Process` records and the `Timeline` of execution slices
//! - **`scheduler`**: `Fcfs`, `Srt` and `RoundRobin` behind the `Scheduler`
//!   trait, plus `SimulationRun` results and `RunKpi` metrics
//! - **`config`**: quantum, context-switch cost and FCFS order
//! - **`validation`**: precondition checks on process sets
//! - **`loader`**: text and JSON workload parsing
//! - **`report`**: text and JSON renderers behind the `Reporter` trait
//! - **`workload`**: seeded random workload generation
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::config::SimulationConfig;
//! use cpu_sched_sim::models::Process;
//! use cpu_sched_sim::scheduler::simulate_all;
//!
//! let processes = vec![Process::new("P1", 0, 4), Process::new("P2", 0, 4)];
//! let runs = simulate_all(&processes, &SimulationConfig::new(2, 1)).unwrap();
//!
//! let rr = &runs[2];
//! assert_eq!(rr.timeline.to_string(), "P1[0-2] P2[3-5] P1[6-8] P2[9-11]");
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SimError};
