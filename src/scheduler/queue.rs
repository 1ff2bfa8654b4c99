/*!
 * Arrival Queue
 * Shared admission mechanics for all policies
 */

use crate::core::types::Time;
use crate::process::ProcessDescriptor;

/// Per-run view of a process: the descriptor plus its remaining burst
#[derive(Debug, Clone, Copy)]
pub(super) struct Job<'a> {
    /// Position in the snapshot (final tie-breaker)
    pub index: usize,
    pub desc: &'a ProcessDescriptor,
    pub remaining: Time,
}

impl<'a> Job<'a> {
    fn new(index: usize, desc: &'a ProcessDescriptor) -> Self {
        Self {
            index,
            desc,
            remaining: desc.burst,
        }
    }
}

/// Processes that have not arrived yet, in arrival order
///
/// Equal arrivals keep snapshot order (stable sort).
pub(super) struct ArrivalQueue<'a> {
    jobs: Vec<Job<'a>>,
    cursor: usize,
}

impl<'a> ArrivalQueue<'a> {
    pub fn new(snapshot: &'a [ProcessDescriptor]) -> Self {
        let mut jobs: Vec<Job<'a>> = snapshot
            .iter()
            .enumerate()
            .map(|(index, desc)| Job::new(index, desc))
            .collect();
        jobs.sort_by_key(|job| job.desc.arrival);

        Self { jobs, cursor: 0 }
    }

    /// Release every job with `arrival <= now`
    pub fn admit(&mut self, now: Time) -> &[Job<'a>] {
        let start = self.cursor;
        while self
            .jobs
            .get(self.cursor)
            .is_some_and(|job| job.desc.arrival <= now)
        {
            self.cursor += 1;
        }
        &self.jobs[start..self.cursor]
    }

    /// Arrival time of the next job still pending
    pub fn next_arrival(&self) -> Option<Time> {
        self.jobs.get(self.cursor).map(|job| job.desc.arrival)
    }

    pub fn is_drained(&self) -> bool {
        self.cursor >= self.jobs.len()
    }

    /// Every job in arrival order, regardless of admission state
    pub fn into_ordered(self) -> Vec<Job<'a>> {
        self.jobs
    }
}
