//! Workload loading.
//!
//! Two source formats produce the same [`Workload`]:
//!
//! **Text**, one value per line:
//! ```text
//! 4          # quantum
//! 1          # context switch
//! P1,0,5     # id,arrival,burst
//! P2,2,3
//! ```
//! Fields are trimmed, blank lines are skipped and `#` starts a comment.
//!
//! **JSON**:
//! ```json
//! {"config": {"quantum": 4, "context_switch": 1},
//!  "processes": [{"id": "P1", "arrival_time": 0, "burst_time": 5}]}
//! ```
//!
//! Loading only parses. Run [`Workload::validate`] before simulating.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::config::SimulationConfig;
use crate::error::{Result, SimError};
use crate::models::{Process, Tick};
use crate::validation::{validate_processes, validate_time_horizon};

/// A process set together with its simulation scalars.
#[derive(Debug, Clone, PartialEq)]
pub struct Workload {
    /// Quantum and context-switch cost.
    pub config: SimulationConfig,
    /// Processes in input order.
    pub processes: Vec<Process>,
}

/// Input facts of one process as they appear in a JSON workload.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProcessSpec {
    id: String,
    arrival_time: Tick,
    burst_time: Tick,
}

#[derive(Debug, Serialize, Deserialize)]
struct WorkloadSpec {
    config: SimulationConfig,
    processes: Vec<ProcessSpec>,
}

impl Workload {
    /// Creates a workload from parts.
    pub fn new(config: SimulationConfig, processes: Vec<Process>) -> Self {
        Self { config, processes }
    }

    /// Checks both the configuration and the process set.
    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;
        validate_processes(&self.processes)
            .and_then(|()| validate_time_horizon(&self.processes, self.config.context_switch))
            .map_err(SimError::Validation)
    }

    /// Parses the line-oriented text format.
    pub fn from_text(input: &str) -> Result<Self> {
        let mut lines = input
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, strip_comment(line)))
            .filter(|(_, line)| !line.is_empty());

        let (line_no, line) = lines
            .next()
            .ok_or_else(|| SimError::parse(1, "missing quantum"))?;
        let quantum = parse_tick(line, line_no, "quantum")?;

        let (line_no, line) = lines
            .next()
            .ok_or_else(|| SimError::parse(line_no + 1, "missing context switch"))?;
        let context_switch = parse_tick(line, line_no, "context switch")?;

        let processes = lines
            .map(|(line_no, line)| parse_process(line, line_no))
            .collect::<Result<Vec<_>>>()?;

        debug!(quantum, context_switch, processes = processes.len(), "parsed text workload");
        Ok(Self::new(
            SimulationConfig::new(quantum, context_switch),
            processes,
        ))
    }

    /// Parses the JSON format.
    pub fn from_json(input: &str) -> Result<Self> {
        let document: WorkloadSpec = serde_json::from_str(input)?;
        let processes = document
            .processes
            .into_iter()
            .map(|p| Process::new(p.id, p.arrival_time, p.burst_time))
            .collect::<Vec<_>>();
        debug!(processes = processes.len(), "parsed JSON workload");
        Ok(Self::new(document.config, processes))
    }

    /// Serializes the input facts back to the JSON format.
    pub fn to_json(&self) -> Result<String> {
        let document = WorkloadSpec {
            config: self.config,
            processes: self
                .processes
                .iter()
                .map(|p| ProcessSpec {
                    id: p.id.clone(),
                    arrival_time: p.arrival_time,
                    burst_time: p.burst_time,
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Reads a workload file; `.json` files use the JSON format.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = contents.len(), "read workload");

        let is_json = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&contents)
        } else {
            Self::from_text(&contents)
        }
    }
}

impl FromStr for Workload {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

fn strip_comment(line: &str) -> &str {
    line.split('#').next().unwrap_or("").trim()
}

fn parse_tick(field: &str, line: usize, what: &str) -> Result<Tick> {
    let field = field.trim();
    field.parse::<Tick>().map_err(|_| {
        SimError::parse(
            line,
            format!("{what} '{field}' is not a non-negative integer"),
        )
    })
}

fn parse_process(line: &str, line_no: usize) -> Result<Process> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [id, arrival, burst] = fields.as_slice() else {
        return Err(SimError::parse(
            line_no,
            format!("expected 'id,arrival,burst', found {} field(s)", fields.len()),
        ));
    };
    if id.is_empty() {
        return Err(SimError::parse(line_no, "process id is empty"));
    }
    let arrival = parse_tick(arrival, line_no, "arrival time")?;
    let burst = parse_tick(burst, line_no, "burst time")?;
    Ok(Process::new(*id, arrival, burst))
}
