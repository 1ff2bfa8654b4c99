/*!
 * Shortest Job First
 * Non-preemptive: the shortest ready job is picked only at dispatch boundaries
 */

use super::queue::{ArrivalQueue, Job};
use super::timeline::Timeline;
use super::traits::SchedulingAlgorithm;
use super::types::PolicyKind;
use crate::process::ProcessDescriptor;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingAlgorithm for Sjf {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Sjf
    }

    fn run(&self, snapshot: &[ProcessDescriptor]) -> Timeline {
        let mut timeline = Timeline::with_capacity(snapshot.len());
        let mut pending = ArrivalQueue::new(snapshot);
        let mut ready: Vec<Job<'_>> = Vec::with_capacity(snapshot.len());
        let mut now = 0;

        loop {
            ready.extend_from_slice(pending.admit(now));

            // Ties: earliest arrival, then snapshot order
            let Some(pos) = ready
                .iter()
                .enumerate()
                .min_by_key(|(_, job)| (job.desc.burst, job.desc.arrival, job.index))
                .map(|(pos, _)| pos)
            else {
                match pending.next_arrival() {
                    Some(next) => {
                        debug!(from = now, to = next, "CPU idle");
                        now = next;
                        continue;
                    }
                    None => break,
                }
            };

            let job = ready.remove(pos);
            timeline.push(job.desc, now, now + job.remaining);
            now += job.remaining;
        }

        timeline
    }
}
