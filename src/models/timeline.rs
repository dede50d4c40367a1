//! Timeline (Gantt chart) model.
//!
//! A timeline is the append-only record of which process held the processor
//! during which tick interval. Slices are half-open `[start, end)` and are
//! appended in non-decreasing start order without overlap.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Tick;

/// One uninterrupted run of a process on the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Process that ran.
    pub process_id: String,
    /// First tick of the run.
    pub start: Tick,
    /// Tick at which the run ended (exclusive).
    pub end: Tick,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(process_id: impl Into<String>, start: Tick, end: Tick) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Length of the slice in ticks.
    #[inline]
    pub fn duration(&self) -> Tick {
        self.end - self.start
    }
}

/// Ordered record of execution slices for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    ///
    /// Callers must keep `start < end` and never start before the previous
    /// slice ended; both are checked in debug builds.
    pub fn push(&mut self, slice: Slice) {
        debug_assert!(slice.start < slice.end, "empty slice for {}", slice.process_id);
        debug_assert!(
            self.slices.last().map_or(true, |last| last.end <= slice.start),
            "slice for {} overlaps the previous one",
            slice.process_id
        );
        self.slices.push(slice);
    }

    /// Appends a slice built from its parts.
    pub fn record(&mut self, process_id: &str, start: Tick, end: Tick) {
        self.push(Slice::new(process_id, start, end));
    }

    /// The most recent slice.
    pub fn last(&self) -> Option<&Slice> {
        self.slices.last()
    }

    /// Process id of the most recent slice.
    pub fn last_process_id(&self) -> Option<&str> {
        self.slices.last().map(|s| s.process_id.as_str())
    }

    /// All slices in recording order.
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Iterates slices in recording order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slice> {
        self.slices.iter()
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing has run yet.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// End tick of the last slice (0 when empty).
    pub fn end_time(&self) -> Tick {
        self.slices.last().map_or(0, |s| s.end)
    }

    /// Slices belonging to one process.
    pub fn slices_for(&self, process_id: &str) -> Vec<&Slice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Total ticks a process spent on the processor.
    pub fn busy_time_for(&self, process_id: &str) -> Tick {
        self.slices_for(process_id).iter().map(|s| s.duration()).sum()
    }

    /// Total ticks any process spent on the processor.
    pub fn busy_time(&self) -> Tick {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Number of transitions between two different processes.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|pair| pair[0].process_id != pair[1].process_id)
            .count()
    }

    /// Copy with back-to-back slices of the same process merged.
    ///
    /// Slices separated by any gap stay apart, so context-switch overhead
    /// and idle periods remain visible.
    pub fn coalesced(&self) -> Timeline {
        let mut merged: Vec<Slice> = Vec::with_capacity(self.slices.len());
        for slice in &self.slices {
            match merged.last_mut() {
                Some(prev) if prev.process_id == slice.process_id && prev.end == slice.start => {
                    prev.end = slice.end;
                }
                _ => merged.push(slice.clone()),
            }
        }
        Timeline { slices: merged }
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Slice;
    type IntoIter = std::slice::Iter<'a, Slice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}-{}]", self.process_id, self.start, self.end)
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slice) in self.slices.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{slice}")?;
        }
        Ok(())
    }
}
