/*!
 * Preemptive Priority Scheduling
 * Lower priority value runs first; a strictly better arrival preempts
 *
 * # Simulation model
 * Event driven: time jumps straight to the next arrival or completion. The
 * running job always has a priority no worse than every ready job, and the
 * ready set only gains members on arrival, so an arrival instant is the only
 * point where a preemption can happen. The result is identical to stepping one
 * time unit at a time, at O(n) steps per arrival instead of O(total burst).
 */

use super::queue::{ArrivalQueue, Job};
use super::timeline::Timeline;
use super::traits::SchedulingAlgorithm;
use super::types::PolicyKind;
use crate::core::types::Time;
use crate::process::ProcessDescriptor;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityPreemptive;

/// Job holding the CPU plus the start of its open event
struct Running<'a> {
    job: Job<'a>,
    dispatched_at: Time,
}

/// Best ready job: lowest priority value, then earliest entry into the ready list
fn select(ready: &[Job<'_>]) -> Option<usize> {
    ready
        .iter()
        .enumerate()
        .min_by_key(|(pos, job)| (job.desc.priority, *pos))
        .map(|(pos, _)| pos)
}

impl SchedulingAlgorithm for PriorityPreemptive {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Priority
    }

    fn run(&self, snapshot: &[ProcessDescriptor]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut pending = ArrivalQueue::new(snapshot);
        let mut ready: Vec<Job<'_>> = Vec::with_capacity(snapshot.len());
        let mut running: Option<Running<'_>> = None;
        let mut now: Time = 0;

        loop {
            ready.extend_from_slice(pending.admit(now));

            if let Some(pos) = select(&ready) {
                // Equal priority never preempts
                let preempt = running
                    .as_ref()
                    .map_or(true, |r| ready[pos].desc.priority < r.job.desc.priority);

                if preempt {
                    if let Some(prev) = running.take() {
                        if now > prev.dispatched_at {
                            timeline.push(prev.job.desc, prev.dispatched_at, now);
                        }
                        debug!(
                            preempted = %prev.job.desc.id,
                            by = %ready[pos].desc.id,
                            remaining = prev.job.remaining,
                            at = now,
                            "Preemption"
                        );
                        ready.push(prev.job);
                    }

                    let job = ready.remove(pos);
                    debug!(id = %job.desc.id, priority = job.desc.priority, at = now, "Dispatch");
                    running = Some(Running {
                        job,
                        dispatched_at: now,
                    });
                }
            }

            let Some(current) = running.as_mut() else {
                match pending.next_arrival() {
                    Some(next) => {
                        debug!(from = now, to = next, "CPU idle");
                        now = next;
                        continue;
                    }
                    None => break,
                }
            };

            // Run until completion or the next possible preemption point
            let finish = now + current.job.remaining;
            let until = pending.next_arrival().map_or(finish, |next| next.min(finish));
            current.job.remaining -= until - now;
            now = until;

            if current.job.remaining == 0 {
                timeline.push(current.job.desc, current.dispatched_at, now);
                running = None;
            }
        }

        debug_assert!(pending.is_drained() && ready.is_empty());
        timeline
    }
}
