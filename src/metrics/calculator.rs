/*!
 * Metrics Calculator
 * Derives wait, response and turnaround times from a timeline
 */

use super::types::{Metrics, ProcessMetrics};
use crate::core::errors::{SimError, SimResult};
use crate::core::types::Time;
use crate::process::ProcessDescriptor;
use crate::scheduler::Timeline;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// First start and last end seen for a process
#[derive(Debug, Clone, Copy)]
struct Span {
    first_start: Time,
    completion: Time,
}

/// Compute per-process and aggregate metrics
///
/// The timeline must come from scheduling `snapshot`: every event names a
/// snapshot process and every snapshot process runs at least once.
#[instrument(level = "debug", skip_all, fields(events = timeline.len(), processes = snapshot.len()))]
pub fn compute_metrics(timeline: &Timeline, snapshot: &[ProcessDescriptor]) -> SimResult<Metrics> {
    if timeline.is_empty() {
        return Err(SimError::EmptyTimeline);
    }
    if snapshot.is_empty() {
        return Err(SimError::EmptyRegistry);
    }

    let mut spans: HashMap<&str, Span> = HashMap::with_capacity(snapshot.len());
    for event in timeline {
        if !snapshot.iter().any(|p| p.id == event.process) {
            return Err(SimError::UnknownProcess(event.process.clone()));
        }
        spans
            .entry(event.process.as_str())
            .and_modify(|span| {
                span.first_start = span.first_start.min(event.start);
                span.completion = span.completion.max(event.end);
            })
            .or_insert(Span {
                first_start: event.start,
                completion: event.end,
            });
    }

    let processes = snapshot
        .iter()
        .map(|desc| {
            let span = spans
                .get(desc.id.as_str())
                .ok_or_else(|| SimError::UnscheduledProcess(desc.id.clone()))?;
            let turnaround_time = span.completion - desc.arrival;
            Ok(ProcessMetrics {
                id: desc.id.clone(),
                arrival: desc.arrival,
                burst: desc.burst,
                first_start: span.first_start,
                completion: span.completion,
                wait_time: turnaround_time - desc.burst,
                response_time: span.first_start - desc.arrival,
                turnaround_time,
            })
        })
        .collect::<SimResult<Vec<_>>>()?;

    let count = processes.len() as f64;
    // Accumulate in f64: per-process times fit in Time, their sum may not
    let average = |f: fn(&ProcessMetrics) -> Time| -> f64 {
        processes.iter().map(|p| f(p) as f64).sum::<f64>() / count
    };

    let makespan = timeline.makespan();
    let cpu_utilization_percent = if makespan > 0 {
        timeline.busy_time() as f64 / makespan as f64 * 100.0
    } else {
        0.0
    };

    let metrics = Metrics {
        avg_wait: average(|p| p.wait_time),
        avg_response: average(|p| p.response_time),
        avg_turnaround: average(|p| p.turnaround_time),
        cpu_utilization_percent,
        processes,
    };

    debug!(
        avg_wait = metrics.avg_wait,
        avg_turnaround = metrics.avg_turnaround,
        cpu = metrics.cpu_utilization_percent,
        "Metrics computed"
    );
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{schedule, SchedulerPolicy};

    #[test]
    fn test_fcfs_metrics() {
        let snapshot = vec![
            ProcessDescriptor::new("A", 0, 5),
            ProcessDescriptor::new("B", 1, 3),
        ];
        let timeline = schedule(&SchedulerPolicy::Fcfs, &snapshot).unwrap();
        let metrics = compute_metrics(&timeline, &snapshot).unwrap();

        let a = metrics.get("A").unwrap();
        assert_eq!((a.wait_time, a.response_time, a.turnaround_time), (0, 0, 5));
        let b = metrics.get("B").unwrap();
        assert_eq!((b.wait_time, b.response_time, b.turnaround_time), (4, 4, 7));

        assert_eq!(metrics.avg_wait, 2.0);
        assert_eq!(metrics.avg_response, 2.0);
        assert_eq!(metrics.avg_turnaround, 6.0);
        assert_eq!(metrics.cpu_utilization_percent, 100.0);
    }

    #[test]
    fn test_idle_time_lowers_utilization() {
        let snapshot = vec![
            ProcessDescriptor::new("A", 0, 2),
            ProcessDescriptor::new("B", 6, 2),
        ];
        let timeline = schedule(&SchedulerPolicy::Fcfs, &snapshot).unwrap();
        let metrics = compute_metrics(&timeline, &snapshot).unwrap();
        assert_eq!(metrics.cpu_utilization_percent, 50.0);
    }

    #[test]
    fn test_response_differs_from_wait_when_preempted() {
        let snapshot = vec![
            ProcessDescriptor::new("A", 0, 5),
            ProcessDescriptor::new("B", 1, 3),
        ];
        let timeline = schedule(&SchedulerPolicy::round_robin(2).unwrap(), &snapshot).unwrap();
        let metrics = compute_metrics(&timeline, &snapshot).unwrap();

        // A: [0,2) [4,6) [7,8)
        let a = metrics.get("A").unwrap();
        assert_eq!((a.response_time, a.turnaround_time, a.wait_time), (0, 8, 3));
        // B: [2,4) [6,7)
        let b = metrics.get("B").unwrap();
        assert_eq!((b.response_time, b.turnaround_time, b.wait_time), (1, 6, 3));
    }

    #[test]
    fn test_averages_near_time_limit() {
        let burst = i64::MAX / 4;
        let snapshot = vec![
            ProcessDescriptor::new("A", 0, burst),
            ProcessDescriptor::new("B", 0, burst),
            ProcessDescriptor::new("C", 0, burst),
        ];
        let timeline = schedule(&SchedulerPolicy::Fcfs, &snapshot).unwrap();
        let metrics = compute_metrics(&timeline, &snapshot).unwrap();

        // Turnarounds burst, 2*burst, 3*burst sum past i64::MAX
        let expected = 2.0 * burst as f64;
        assert!((metrics.avg_turnaround - expected).abs() / expected < 1e-9);
        assert_eq!(metrics.cpu_utilization_percent, 100.0);
    }

    #[test]
    fn test_mismatched_inputs() {
        let snapshot = vec![
            ProcessDescriptor::new("A", 0, 1),
            ProcessDescriptor::new("B", 0, 1),
        ];

        assert_eq!(
            compute_metrics(&Timeline::new(), &snapshot),
            Err(SimError::EmptyTimeline)
        );

        let timeline = schedule(&SchedulerPolicy::Fcfs, &snapshot[..1]).unwrap();
        assert_eq!(
            compute_metrics(&timeline, &snapshot),
            Err(SimError::UnscheduledProcess("B".into()))
        );

        let other = vec![ProcessDescriptor::new("Z", 0, 1)];
        assert_eq!(
            compute_metrics(&timeline, &other),
            Err(SimError::UnknownProcess("A".into()))
        );
    }
}
