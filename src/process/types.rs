/*!
 * Process Types
 * Process descriptors as entered by the user and persisted to disk
 */

use crate::core::serde::default_priority;
use crate::core::types::{Pid, Priority, Time, DEFAULT_PRIORITY};
use serde::{Deserialize, Serialize};

/// Process descriptor
///
/// Doubles as the persisted record format: `{id, arrival, burst, priority}`
/// with `priority` optional on input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessDescriptor {
    pub id: Pid,
    pub arrival: Time,
    pub burst: Time,
    #[serde(default = "default_priority")]
    pub priority: Priority,
}

impl ProcessDescriptor {
    pub fn new(id: impl Into<Pid>, arrival: Time, burst: Time) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: DEFAULT_PRIORITY,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}
