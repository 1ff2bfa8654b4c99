/*!
 * Round Robin
 * FIFO rotation with a fixed quantum
 */

use super::queue::{ArrivalQueue, Job};
use super::timeline::Timeline;
use super::traits::SchedulingAlgorithm;
use super::types::{PolicyKind, TimeQuantum};
use crate::process::ProcessDescriptor;
use std::collections::VecDeque;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin {
    quantum: TimeQuantum,
}

impl RoundRobin {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }

    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }
}

impl SchedulingAlgorithm for RoundRobin {
    fn kind(&self) -> PolicyKind {
        PolicyKind::RoundRobin
    }

    fn run(&self, snapshot: &[ProcessDescriptor]) -> Timeline {
        let quantum = self.quantum.get();
        let mut timeline = Timeline::new();
        let mut pending = ArrivalQueue::new(snapshot);
        let mut queue: VecDeque<Job<'_>> = VecDeque::with_capacity(snapshot.len());
        let mut now = 0;

        loop {
            queue.extend(pending.admit(now).iter().copied());

            let Some(mut job) = queue.pop_front() else {
                match pending.next_arrival() {
                    Some(next) => {
                        debug!(from = now, to = next, "CPU idle");
                        now = next;
                        continue;
                    }
                    None => break,
                }
            };

            let slice = quantum.min(job.remaining);
            timeline.push(job.desc, now, now + slice);
            now += slice;
            job.remaining -= slice;

            // Arrivals during the slice go ahead of the preempted job
            queue.extend(pending.admit(now).iter().copied());
            if job.remaining > 0 {
                debug!(id = %job.desc.id, remaining = job.remaining, at = now, "Quantum expired");
                queue.push_back(job);
            }
        }

        timeline
    }
}
