/*!
 * Scheduler Traits
 * Interface implemented by every dispatch policy
 */

use super::timeline::Timeline;
use super::types::PolicyKind;
use crate::process::ProcessDescriptor;

/// A dispatch policy turning a process snapshot into a timeline
///
/// Implementations are pure: the same snapshot always yields the same
/// timeline. The snapshot has already passed `validate_snapshot`.
pub trait SchedulingAlgorithm {
    fn kind(&self) -> PolicyKind;

    fn run(&self, snapshot: &[ProcessDescriptor]) -> Timeline;
}
