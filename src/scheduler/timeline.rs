/*!
 * Timeline
 * Chronological CPU allocation intervals produced by one scheduling run
 */

use crate::core::types::{Pid, Priority, Time};
use crate::process::ProcessDescriptor;
use serde::{Deserialize, Serialize};

/// One contiguous interval `[start, end)` during which a process held the CPU
///
/// Arrival, burst and priority are copied from the descriptor for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TimelineEvent {
    pub process: Pid,
    pub start: Time,
    pub end: Time,
    pub arrival: Time,
    pub burst: Time,
    pub priority: Priority,
}

impl TimelineEvent {
    pub fn new(desc: &ProcessDescriptor, start: Time, end: Time) -> Self {
        Self {
            process: desc.id.clone(),
            start,
            end,
            arrival: desc.arrival,
            burst: desc.burst,
            priority: desc.priority,
        }
    }

    #[inline]
    pub fn duration(&self) -> Time {
        self.end - self.start
    }
}

/// Start-sorted sequence of events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    events: Vec<TimelineEvent>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
        }
    }

    /// Append `[start, end)` for `desc`
    ///
    /// Events are emitted in time order, so the CPU is never double-booked.
    pub(crate) fn push(&mut self, desc: &ProcessDescriptor, start: Time, end: Time) {
        debug_assert!(end > start, "empty interval [{start}, {end}) for {}", desc.id);
        debug_assert!(
            start >= desc.arrival,
            "process {} dispatched at {start} before arrival {}",
            desc.id,
            desc.arrival
        );
        debug_assert!(
            self.events.last().map_or(true, |last| last.end <= start),
            "interval [{start}, {end}) for {} overlaps previous event",
            desc.id
        );
        self.events.push(TimelineEvent::new(desc, start, end));
    }

    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Completion time of the last event (0 when empty)
    pub fn makespan(&self) -> Time {
        self.events.iter().map(|e| e.end).max().unwrap_or(0)
    }

    /// Total time the CPU was busy
    pub fn busy_time(&self) -> Time {
        self.events.iter().map(TimelineEvent::duration).sum()
    }

    /// Events belonging to one process, in time order
    pub fn events_for<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a TimelineEvent> + 'a {
        self.events.iter().filter(move |e| e.process == id)
    }

    /// Process ids in order of first dispatch
    pub fn process_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for event in &self.events {
            if !ids.contains(&event.process.as_str()) {
                ids.push(&event.process);
            }
        }
        ids
    }

    pub fn into_events(self) -> Vec<TimelineEvent> {
        self.events
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEvent;
    type IntoIter = std::slice::Iter<'a, TimelineEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
