/*!
 * Policy Comparison
 * Runs every policy against the same snapshot
 */

use super::timeline::Timeline;
use super::types::{PolicyKind, SchedulerPolicy, TimeQuantum};
use crate::core::errors::SimResult;
use crate::metrics::{compute_metrics, Metrics};
use crate::process::ProcessDescriptor;
use serde::Serialize;
use tracing::info;

/// Outcome of scheduling one snapshot under one policy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationRun {
    pub policy: SchedulerPolicy,
    pub timeline: Timeline,
    pub metrics: Metrics,
}

impl SimulationRun {
    /// Schedule `snapshot` and derive its metrics
    pub fn execute(policy: SchedulerPolicy, snapshot: &[ProcessDescriptor]) -> SimResult<Self> {
        let timeline = super::schedule(&policy, snapshot)?;
        let metrics = compute_metrics(&timeline, snapshot)?;
        Ok(Self {
            policy,
            timeline,
            metrics,
        })
    }
}

/// FCFS, SJF, Round Robin and Priority over one snapshot, in that order
///
/// Runs are independent; none observes another's state.
pub fn compare(snapshot: &[ProcessDescriptor], quantum: TimeQuantum) -> SimResult<Vec<SimulationRun>> {
    let runs = PolicyKind::ALL
        .into_iter()
        .map(|kind| SimulationRun::execute(SchedulerPolicy::from_kind(kind, quantum), snapshot))
        .collect::<SimResult<Vec<_>>>()?;

    for run in &runs {
        info!(
            policy = run.policy.kind().as_str(),
            avg_wait = run.metrics.avg_wait,
            avg_response = run.metrics.avg_response,
            avg_turnaround = run.metrics.avg_turnaround,
            cpu = run.metrics.cpu_utilization_percent,
            "Comparison result"
        );
    }

    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::SimError;

    #[test]
    fn test_compare_runs_all_policies_in_order() {
        let snapshot = vec![
            ProcessDescriptor::new("A", 0, 8).with_priority(3),
            ProcessDescriptor::new("B", 1, 4).with_priority(1),
            ProcessDescriptor::new("C", 2, 2).with_priority(2),
        ];
        let runs = compare(&snapshot, TimeQuantum::new(2).unwrap()).unwrap();

        let kinds: Vec<PolicyKind> = runs.iter().map(|r| r.policy.kind()).collect();
        assert_eq!(kinds, PolicyKind::ALL.to_vec());

        for run in &runs {
            assert_eq!(run.timeline.busy_time(), 14);
            assert_eq!(run.metrics.processes.len(), 3);
        }
    }

    #[test]
    fn test_compare_empty_snapshot() {
        assert_eq!(
            compare(&[], TimeQuantum::default()),
            Err(SimError::EmptyRegistry)
        );
    }
}
