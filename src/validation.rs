//! Input validation for process sets.
//!
//! Checks the loader contract before any strategy runs. Detects:
//! - Duplicate process IDs
//! - Empty process IDs
//! - Zero burst times
//! - Records whose simulation state is not fresh
//! - Workloads whose clock could exceed the tick range
//!
//! The strategies never re-validate; they assume these checks passed.

use crate::models::{Process, Tick};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has an empty ID.
    EmptyId,
    /// A process requires no processor time.
    ZeroBurst,
    /// A process was already (partially) simulated.
    StaleState,
    /// The simulated clock could run past `Tick::MAX`.
    ClockOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process set.
///
/// Checks:
/// 1. Every ID is non-empty
/// 2. No duplicate IDs
/// 3. Every burst is positive
/// 4. `remaining_time == burst_time` and no derived metric is set
///
/// An empty set is valid: every strategy terminates on it immediately.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (index, p) in processes.iter().enumerate() {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at position {index} has an empty ID"),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process '{}' has zero burst time", p.id),
            ));
        }

        let touched = p.remaining_time != p.burst_time
            || p.start_time.is_some()
            || p.finish_time.is_some()
            || p.waiting_time.is_some()
            || p.turnaround_time.is_some();
        if touched {
            errors.push(ValidationError::new(
                ValidationErrorKind::StaleState,
                format!("Process '{}' carries state from a previous run", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that no strategy can advance the clock past `Tick::MAX`.
///
/// Every context switch precedes a slice of at least one tick, so the clock
/// never exceeds `max(arrival) + Σ burst × (1 + context_switch)`. Sets whose
/// bound does not fit in a [`Tick`] are rejected.
pub fn validate_time_horizon(processes: &[Process], context_switch: Tick) -> ValidationResult {
    let per_tick = context_switch.checked_add(1);
    let work = processes.iter().try_fold(0 as Tick, |total, p| {
        total.checked_add(per_tick?.checked_mul(p.burst_time)?)
    });
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);

    match work.and_then(|work| latest_arrival.checked_add(work)) {
        Some(_) => Ok(()),
        None => Err(vec![ValidationError::new(
            ValidationErrorKind::ClockOverflow,
            format!(
                "Arrivals, bursts and a context switch of {context_switch} \
                 exceed the representable clock range"
            ),
        )]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 4, 1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_set_is_valid() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P1", 2, 3)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_empty_id() {
        let processes = vec![Process::new("  ", 0, 5)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyId);
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![Process::new("P1", 0, 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroBurst));
    }

    #[test]
    fn test_stale_state() {
        let mut p = Process::new("P1", 0, 5);
        p.remaining_time = 2;
        let errors = validate_processes(&[p]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::StaleState);
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate + zero burst
        let processes = vec![
            Process::new("P1", 0, 5),
            Process::new("P1", 0, 3),
            Process::new("P2", 0, 0),
        ];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_time_horizon_fits() {
        assert!(validate_time_horizon(&sample_processes(), 3).is_ok());
        assert!(validate_time_horizon(&[], Tick::MAX).is_ok());
    }

    #[test]
    fn test_time_horizon_arrival_overflow() {
        let processes = vec![Process::new("P1", 0, 1), Process::new("P2", Tick::MAX, 1)];
        assert!(validate_processes(&processes).is_ok());

        let errors = validate_time_horizon(&processes, 1).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::ClockOverflow);
    }

    #[test]
    fn test_time_horizon_switch_overflow() {
        let processes = vec![Process::new("P1", 0, 2), Process::new("P2", 0, 2)];
        assert!(validate_time_horizon(&processes, Tick::MAX / 8).is_ok());
        assert!(validate_time_horizon(&processes, Tick::MAX / 2).is_err());
        assert!(validate_time_horizon(&processes, Tick::MAX).is_err());
    }
}
