/*!
 * Scheduler Types
 * Policy selection, quantum and run configuration
 */

use crate::core::errors::{SimError, SimResult};
use crate::core::types::{Time, DEFAULT_QUANTUM};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Dispatch policy without its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// First come, first served
    Fcfs,
    /// Shortest job first (non-preemptive)
    Sjf,
    /// Round Robin with a fixed quantum
    RoundRobin,
    /// Priority-based preemptive scheduling
    Priority,
}

impl PolicyKind {
    /// Every policy, in comparison order
    pub const ALL: [PolicyKind; 4] = [Self::Fcfs, Self::Sjf, Self::RoundRobin, Self::Priority];

    /// Parse from string representation
    pub fn from_str(s: &str) -> SimResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "round_robin" | "roundrobin" | "round robin" | "rr" => Ok(Self::RoundRobin),
            "priority" | "prio" => Ok(Self::Priority),
            _ => Err(SimError::UnknownPolicy(s.to_string())),
        }
    }

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::RoundRobin => "round_robin",
            Self::Priority => "priority",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::RoundRobin => "Round Robin",
            Self::Priority => "Priority",
        };
        f.write_str(label)
    }
}

impl Serialize for PolicyKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PolicyKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Round Robin time quantum (always positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Time);

impl TimeQuantum {
    pub fn new(units: Time) -> SimResult<Self> {
        if units <= 0 {
            return Err(SimError::InvalidQuantum(format!(
                "{} must be greater than 0",
                units
            )));
        }
        Ok(Self(units))
    }

    #[inline(always)]
    pub const fn get(&self) -> Time {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM)
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let units = Time::deserialize(deserializer)?;
        Self::new(units).map_err(serde::de::Error::custom)
    }
}

/// Scheduling policy together with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SchedulerPolicy {
    Fcfs,
    Sjf,
    RoundRobin { quantum: TimeQuantum },
    Priority,
}

impl SchedulerPolicy {
    /// Round Robin with a validated quantum
    pub fn round_robin(quantum: Time) -> SimResult<Self> {
        Ok(Self::RoundRobin {
            quantum: TimeQuantum::new(quantum)?,
        })
    }

    /// Attach parameters to a policy kind
    pub fn from_kind(kind: PolicyKind, quantum: TimeQuantum) -> Self {
        match kind {
            PolicyKind::Fcfs => Self::Fcfs,
            PolicyKind::Sjf => Self::Sjf,
            PolicyKind::RoundRobin => Self::RoundRobin { quantum },
            PolicyKind::Priority => Self::Priority,
        }
    }

    pub const fn kind(&self) -> PolicyKind {
        match self {
            Self::Fcfs => PolicyKind::Fcfs,
            Self::Sjf => PolicyKind::Sjf,
            Self::RoundRobin { .. } => PolicyKind::RoundRobin,
            Self::Priority => PolicyKind::Priority,
        }
    }
}

impl fmt::Display for SchedulerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "Round Robin (quantum {})", quantum.get()),
            other => write!(f, "{}", other.kind()),
        }
    }
}

/// Simulation configuration as supplied by a caller or the environment
///
/// Environment variables:
/// - SCHED_POLICY: fcfs | sjf | round_robin | priority (default: fcfs)
/// - SCHED_QUANTUM: Round Robin quantum (default: 2)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationConfig {
    pub policy: PolicyKind,
    #[serde(default, skip_serializing_if = "crate::core::serde::is_none")]
    pub quantum: Option<Time>,
    /// Unparsed SCHED_QUANTUM, read only when a quantum is needed
    #[serde(skip)]
    env_quantum: Option<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(PolicyKind::Fcfs)
    }
}

impl SimulationConfig {
    pub fn new(policy: PolicyKind) -> Self {
        Self {
            policy,
            quantum: None,
            env_quantum: None,
        }
    }

    pub fn with_quantum(mut self, quantum: Time) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Read configuration from the environment
    pub fn from_env() -> SimResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> SimResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let policy = match lookup("SCHED_POLICY") {
            Some(name) => PolicyKind::from_str(&name)?,
            None => PolicyKind::Fcfs,
        };

        Ok(Self {
            policy,
            quantum: None,
            env_quantum: lookup("SCHED_QUANTUM"),
        })
    }

    /// Quantum to use: explicit value, then SCHED_QUANTUM, then the default
    pub fn quantum(&self) -> SimResult<TimeQuantum> {
        match (self.quantum, self.env_quantum.as_deref()) {
            (Some(units), _) => TimeQuantum::new(units),
            (None, Some(raw)) => TimeQuantum::new(parse_quantum(raw)?),
            (None, None) => Ok(TimeQuantum::default()),
        }
    }

    /// Resolve into a tagged policy
    ///
    /// The quantum is only validated when Round Robin is selected.
    pub fn policy(&self) -> SimResult<SchedulerPolicy> {
        match self.policy {
            PolicyKind::RoundRobin => Ok(SchedulerPolicy::RoundRobin {
                quantum: self.quantum()?,
            }),
            kind => Ok(SchedulerPolicy::from_kind(kind, TimeQuantum::default())),
        }
    }
}

/// Parse a quantum given as text
pub fn parse_quantum(raw: &str) -> SimResult<Time> {
    raw.trim()
        .parse::<Time>()
        .map_err(|_| SimError::InvalidQuantum(format!("'{}' is not an integer", raw)))
}
