/*!
 * Metrics Types
 * Per-process and aggregate performance figures for one timeline
 */

use crate::core::types::{Pid, Time};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Figures for a single process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessMetrics {
    pub id: Pid,
    pub arrival: Time,
    pub burst: Time,
    /// Start of the first event
    pub first_start: Time,
    /// End of the last event
    pub completion: Time,
    pub wait_time: Time,
    pub response_time: Time,
    pub turnaround_time: Time,
}

/// Metrics for a whole run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Metrics {
    /// One entry per process, in snapshot order
    pub processes: Vec<ProcessMetrics>,
    pub avg_wait: f64,
    pub avg_response: f64,
    pub avg_turnaround: f64,
    pub cpu_utilization_percent: f64,
}

impl Metrics {
    pub fn get(&self, id: &str) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|p| p.id == id)
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Per-process times:")?;
        for p in &self.processes {
            writeln!(
                f,
                "  {}: wait={}, response={}, turnaround={}",
                p.id, p.wait_time, p.response_time, p.turnaround_time
            )?;
        }
        writeln!(f, "Averages:")?;
        writeln!(f, "  wait time:       {:.2}", self.avg_wait)?;
        writeln!(f, "  response time:   {:.2}", self.avg_response)?;
        writeln!(f, "  turnaround time: {:.2}", self.avg_turnaround)?;
        write!(f, "  CPU utilization: {:.2}%", self.cpu_utilization_percent)
    }
}
