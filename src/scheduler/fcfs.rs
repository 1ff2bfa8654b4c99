/*!
 * First Come, First Served
 * Non-preemptive dispatch in arrival order
 */

use super::queue::ArrivalQueue;
use super::timeline::Timeline;
use super::traits::SchedulingAlgorithm;
use super::types::PolicyKind;
use crate::process::ProcessDescriptor;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingAlgorithm for Fcfs {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fcfs
    }

    fn run(&self, snapshot: &[ProcessDescriptor]) -> Timeline {
        let mut timeline = Timeline::with_capacity(snapshot.len());
        let mut now = 0;

        for job in ArrivalQueue::new(snapshot).into_ordered() {
            if now < job.desc.arrival {
                debug!(from = now, to = job.desc.arrival, "CPU idle");
                now = job.desc.arrival;
            }
            timeline.push(job.desc, now, now + job.remaining);
            now += job.remaining;
        }

        timeline
    }
}
