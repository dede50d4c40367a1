//! Command-line driver.
//!
//! ```text
//! cpu-sched-sim [WORKLOAD] [--json] [--coalesce] [--algorithm fcfs|srt|rr]... [--fcfs-by-arrival]
//! ```
//!
//! Without a workload path the filename is read from stdin.

use std::error::Error;
use std::io::{self, BufRead, Write};
use tracing::{error, info};

use cpu_sched_sim::logging::init_tracing;
use cpu_sched_sim::loader::Workload;
use cpu_sched_sim::report::{JsonReporter, Reporter, TextReporter};
use cpu_sched_sim::scheduler::{simulate, Algorithm, FcfsOrder};
use cpu_sched_sim::SimError;

#[derive(Debug, Default)]
struct Options {
    path: Option<String>,
    json: bool,
    coalesce: bool,
    algorithms: Vec<Algorithm>,
    fcfs_by_arrival: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, SimError> {
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--coalesce" => options.coalesce = true,
            "--fcfs-by-arrival" => options.fcfs_by_arrival = true,
            "--algorithm" | "-a" => {
                let value = args
                    .next()
                    .ok_or_else(|| SimError::invalid_config("--algorithm needs a value"))?;
                options.algorithms.push(value.parse()?);
            }
            flag if flag.starts_with('-') => {
                return Err(SimError::invalid_config(format!("unknown option '{flag}'")));
            }
            path => {
                if options.path.replace(path.to_string()).is_some() {
                    return Err(SimError::invalid_config("only one workload path is accepted"));
                }
            }
        }
    }

    if options.algorithms.is_empty() {
        options.algorithms = Algorithm::ALL.to_vec();
    }
    Ok(options)
}

fn prompt_for_path() -> io::Result<String> {
    print!("Enter the filename of the process data: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn run(options: Options) -> Result<(), Box<dyn Error>> {
    let path = match options.path {
        Some(path) => path,
        None => prompt_for_path()?,
    };

    let mut workload = Workload::load(&path)?;
    if options.fcfs_by_arrival {
        workload.config = workload.config.with_fcfs_order(FcfsOrder::ArrivalTime);
    }
    info!(
        path = %path,
        processes = workload.processes.len(),
        quantum = workload.config.quantum,
        context_switch = workload.config.context_switch,
        "workload loaded"
    );

    let runs = simulate(&workload.processes, &workload.config, &options.algorithms)?;

    let stdout = io::stdout();
    if options.json {
        JsonReporter::new(stdout.lock()).report_all(&runs)?;
    } else {
        TextReporter::new(stdout.lock())
            .with_coalesced_timeline(options.coalesce)
            .report_all(&runs)?;
    }
    Ok(())
}

fn main() {
    init_tracing();

    let result = parse_args(std::env::args().skip(1))
        .map_err(Box::<dyn Error>::from)
        .and_then(run);
    if let Err(err) = result {
        error!(error = %err, "simulation failed");
        std::process::exit(1);
    }
}
