//! Reporting of simulation runs.
//!
//! The simulator itself performs no I/O. Callers hand finished
//! [`SimulationRun`]s to a [`Reporter`], which decides how to render them.

use serde::Serialize;
use std::io::Write;

use crate::error::Result;
use crate::models::{Process, Timeline};
use crate::scheduler::{RunKpi, SimulationRun};

/// Consumes finished runs.
pub trait Reporter {
    /// Reports one run.
    fn report(&mut self, run: &SimulationRun) -> Result<()>;

    /// Reports several runs in order.
    fn report_all(&mut self, runs: &[SimulationRun]) -> Result<()> {
        runs.iter().try_for_each(|run| self.report(run))
    }
}

/// Human-readable console report.
///
/// ```text
/// FCFS:
/// Gantt Chart:
/// P1[0-5] P2[6-9]
/// Process P1, Finish: 5, Waiting: 0, Turnaround: 5
/// ...
/// CPU Utilization: 88.89%
/// ```
#[derive(Debug)]
pub struct TextReporter<W: Write> {
    out: W,
    coalesce: bool,
}

impl<W: Write> TextReporter<W> {
    /// Creates a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            coalesce: false,
        }
    }

    /// Merges back-to-back slices of the same process in the Gantt chart.
    pub fn with_coalesced_timeline(mut self, coalesce: bool) -> Self {
        self.coalesce = coalesce;
        self
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_timeline(&mut self, timeline: &Timeline) -> Result<()> {
        writeln!(self.out, "Gantt Chart:")?;
        if self.coalesce {
            writeln!(self.out, "{}", timeline.coalesced())?;
        } else {
            writeln!(self.out, "{timeline}")?;
        }
        Ok(())
    }

    fn write_process(&mut self, p: &Process) -> Result<()> {
        match (p.finish_time, p.waiting_time, p.turnaround_time) {
            (Some(finish), Some(waiting), Some(turnaround)) => writeln!(
                self.out,
                "Process {}, Finish: {finish}, Waiting: {waiting}, Turnaround: {turnaround}",
                p.id
            )?,
            _ => writeln!(self.out, "Process {}, unfinished", p.id)?,
        }
        Ok(())
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, run: &SimulationRun) -> Result<()> {
        writeln!(self.out, "\n{}:", run.algorithm)?;
        self.write_timeline(&run.timeline)?;
        for p in &run.processes {
            self.write_process(p)?;
        }

        let kpi = RunKpi::calculate(run);
        writeln!(self.out, "Average Waiting: {:.2}", kpi.avg_waiting_time)?;
        writeln!(self.out, "Average Turnaround: {:.2}", kpi.avg_turnaround_time)?;
        writeln!(self.out, "CPU Utilization: {:.2}%", run.cpu_utilization)?;
        Ok(())
    }
}

/// JSON report, one document per line.
#[derive(Debug)]
pub struct JsonReporter<W: Write> {
    out: W,
}

#[derive(Serialize)]
struct JsonRun<'a> {
    #[serde(flatten)]
    run: &'a SimulationRun,
    kpi: RunKpi,
}

impl<W: Write> JsonReporter<W> {
    /// Creates a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, run: &SimulationRun) -> Result<()> {
        let doc = JsonRun {
            run,
            kpi: RunKpi::calculate(run),
        };
        serde_json::to_writer(&mut self.out, &doc)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{Fcfs, Scheduler, Srt};
    use pretty_assertions::assert_eq;

    fn sample_run() -> SimulationRun {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
        Fcfs::new(1).simulate(&processes)
    }

    #[test]
    fn test_text_report() {
        let mut reporter = TextReporter::new(Vec::new());
        reporter.report(&sample_run()).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();

        let expected = "\nFCFS:\n\
            Gantt Chart:\n\
            P1[0-5] P2[6-9]\n\
            Process P1, Finish: 5, Waiting: 0, Turnaround: 5\n\
            Process P2, Finish: 9, Waiting: 5, Turnaround: 8\n\
            Average Waiting: 2.50\n\
            Average Turnaround: 6.50\n\
            CPU Utilization: 88.89%\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_text_report_coalesced() {
        let run = Srt::new(0).simulate(&[Process::new("P1", 0, 3)]);
        let mut raw = TextReporter::new(Vec::new());
        raw.report(&run).unwrap();
        let raw = String::from_utf8(raw.into_inner()).unwrap();
        assert!(raw.contains("P1[0-1] P1[1-2] P1[2-3]"));

        let mut merged = TextReporter::new(Vec::new()).with_coalesced_timeline(true);
        merged.report(&run).unwrap();
        let merged = String::from_utf8(merged.into_inner()).unwrap();
        assert!(merged.contains("Gantt Chart:\nP1[0-3]\n"));
    }

    #[test]
    fn test_text_report_all() {
        let run = sample_run();
        let mut reporter = TextReporter::new(Vec::new());
        reporter.report_all(&[run.clone(), run]).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(text.matches("FCFS:").count(), 2);
    }

    #[test]
    fn test_json_report() {
        let mut reporter = JsonReporter::new(Vec::new());
        reporter.report(&sample_run()).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(text.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["algorithm"], "fcfs");
        assert_eq!(value["final_time"], 9);
        assert_eq!(value["timeline"]["slices"][1]["start"], 6);
        assert_eq!(value["processes"][1]["waiting_time"], 5);
        assert_eq!(value["kpi"]["makespan"], 9);
        assert_eq!(value["context_switch"], 1);
        assert_eq!(value["kpi"]["switch_time"], 1);
        assert_eq!(value["kpi"]["idle_time"], 0);
    }
}
