/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{Pid, Time};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, SimError>;

/// Coarse error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Rejected process descriptor or inconsistent timeline
    Validation,
    /// Rejected scheduling parameters
    Config,
    /// Scheduling or metrics requested on nothing
    EmptyInput,
    /// Persisted process list could not be decoded
    MalformedData,
    /// Filesystem failure while loading or saving
    Io,
}

/// Simulator errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimError {
    #[error("Process id cannot be empty")]
    #[diagnostic(
        code(registry::empty_id),
        help("Give every process a non-empty identifier.")
    )]
    EmptyId,

    #[error("Process with id {0} already exists")]
    #[diagnostic(
        code(registry::duplicate_id),
        help("Process ids must be unique. Remove the existing process or pick another id.")
    )]
    DuplicateId(Pid),

    #[error("Invalid burst time {burst} for process {id}")]
    #[diagnostic(
        code(registry::invalid_burst),
        help("Burst time must be greater than 0.")
    )]
    InvalidBurst { id: Pid, burst: Time },

    #[error("Invalid arrival time {arrival} for process {id}")]
    #[diagnostic(
        code(registry::invalid_arrival),
        help("Arrival time cannot be negative.")
    )]
    InvalidArrival { id: Pid, arrival: Time },

    #[error("Simulation time overflows at process {0}")]
    #[diagnostic(
        code(registry::time_overflow),
        help("Arrival plus the total burst of all processes must fit in a signed 64-bit time value.")
    )]
    TimeOverflow(Pid),

    #[error("Invalid quantum: {0}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("Round Robin needs a quantum greater than 0.")
    )]
    InvalidQuantum(String),

    #[error("Invalid scheduling policy: {0}")]
    #[diagnostic(
        code(scheduler::invalid_policy),
        help("Use fcfs, sjf, round_robin or priority.")
    )]
    UnknownPolicy(String),

    #[error("No processes to schedule")]
    #[diagnostic(
        code(scheduler::empty_registry),
        help("Add at least one process before running a simulation.")
    )]
    EmptyRegistry,

    #[error("Timeline contains no events")]
    #[diagnostic(
        code(metrics::empty_timeline),
        help("Metrics are derived from a non-empty timeline produced by a scheduling run.")
    )]
    EmptyTimeline,

    #[error("Timeline references unknown process {0}")]
    #[diagnostic(
        code(metrics::unknown_process),
        help("Compute metrics against the same snapshot the timeline was scheduled from.")
    )]
    UnknownProcess(Pid),

    #[error("Process {0} never ran in the timeline")]
    #[diagnostic(
        code(metrics::unscheduled_process),
        help("Compute metrics against the same snapshot the timeline was scheduled from.")
    )]
    UnscheduledProcess(Pid),

    #[error("Malformed process record at index {index}: {reason}")]
    #[diagnostic(
        code(persistence::malformed_record),
        help("Every record needs id, arrival and burst; priority is optional.")
    )]
    MalformedRecord { index: usize, reason: String },

    #[error("Malformed process data: {0}")]
    #[diagnostic(
        code(persistence::malformed_data),
        help("Expected a JSON array of process records.")
    )]
    MalformedData(String),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(persistence::io_error),
        help("Check that the file exists and is readable/writable.")
    )]
    Io(String),
}

impl SimError {
    /// Classify the error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyId
            | Self::DuplicateId(_)
            | Self::InvalidBurst { .. }
            | Self::InvalidArrival { .. }
            | Self::TimeOverflow(_)
            | Self::UnknownProcess(_)
            | Self::UnscheduledProcess(_) => ErrorKind::Validation,
            Self::InvalidQuantum(_) | Self::UnknownPolicy(_) => ErrorKind::Config,
            Self::EmptyRegistry | Self::EmptyTimeline => ErrorKind::EmptyInput,
            Self::MalformedRecord { .. } | Self::MalformedData(_) => ErrorKind::MalformedData,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(SimError::EmptyId.kind(), ErrorKind::Validation);
        assert_eq!(
            SimError::DuplicateId("A".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            SimError::InvalidQuantum("0".into()).kind(),
            ErrorKind::Config
        );
        assert_eq!(
            SimError::TimeOverflow("A".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(SimError::EmptyRegistry.kind(), ErrorKind::EmptyInput);
        assert_eq!(SimError::EmptyTimeline.kind(), ErrorKind::EmptyInput);
        assert_eq!(
            SimError::MalformedRecord {
                index: 0,
                reason: "missing field `id`".into()
            }
            .kind(),
            ErrorKind::MalformedData
        );
    }

    #[test]
    fn test_error_serialization() {
        let err = SimError::InvalidBurst {
            id: "P1".into(),
            burst: 0,
        };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"error_type\":\"invalid_burst\""));

        let back: SimError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_error_display() {
        let err = SimError::InvalidArrival {
            id: "P2".into(),
            arrival: -3,
        };
        assert_eq!(err.to_string(), "Invalid arrival time -3 for process P2");
    }
}
