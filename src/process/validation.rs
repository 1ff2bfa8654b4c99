/*!
 * Process Descriptor Validation
 * Checks applied before a descriptor enters a registry or a simulation
 */

use super::types::ProcessDescriptor;
use crate::core::errors::{SimError, SimResult};
use crate::core::types::Time;
use std::collections::HashSet;

/// Validate a single descriptor in isolation
pub fn validate_descriptor(desc: &ProcessDescriptor) -> SimResult<()> {
    if desc.id.trim().is_empty() {
        return Err(SimError::EmptyId);
    }

    if desc.burst <= 0 {
        return Err(SimError::InvalidBurst {
            id: desc.id.clone(),
            burst: desc.burst,
        });
    }

    if desc.arrival < 0 {
        return Err(SimError::InvalidArrival {
            id: desc.id.clone(),
            arrival: desc.arrival,
        });
    }

    // Completion time must be representable
    if desc.arrival.checked_add(desc.burst).is_none() {
        return Err(SimError::TimeOverflow(desc.id.clone()));
    }

    Ok(())
}

/// Validate a full snapshot: every descriptor, id uniqueness and time bound
///
/// No run can finish later than the latest arrival plus the sum of all
/// bursts, so that horizon must fit in `Time`. Reports the first offending
/// descriptor in snapshot order.
pub fn validate_snapshot(snapshot: &[ProcessDescriptor]) -> SimResult<()> {
    if snapshot.is_empty() {
        return Err(SimError::EmptyRegistry);
    }

    let mut seen = HashSet::with_capacity(snapshot.len());
    let mut latest_arrival: Time = 0;
    let mut total_burst: Time = 0;
    for desc in snapshot {
        validate_descriptor(desc)?;
        if !seen.insert(desc.id.as_str()) {
            return Err(SimError::DuplicateId(desc.id.clone()));
        }

        latest_arrival = latest_arrival.max(desc.arrival);
        total_burst = total_burst
            .checked_add(desc.burst)
            .filter(|total| latest_arrival.checked_add(*total).is_some())
            .ok_or_else(|| SimError::TimeOverflow(desc.id.clone()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_validation() {
        assert!(validate_descriptor(&ProcessDescriptor::new("A", 0, 1)).is_ok());
        assert!(validate_descriptor(&ProcessDescriptor::new("A", 5, 10).with_priority(-1)).is_ok());

        assert_eq!(
            validate_descriptor(&ProcessDescriptor::new("", 0, 1)),
            Err(SimError::EmptyId)
        );
        assert_eq!(
            validate_descriptor(&ProcessDescriptor::new("   ", 0, 1)),
            Err(SimError::EmptyId)
        );
        assert!(matches!(
            validate_descriptor(&ProcessDescriptor::new("A", 0, 0)),
            Err(SimError::InvalidBurst { burst: 0, .. })
        ));
        assert!(matches!(
            validate_descriptor(&ProcessDescriptor::new("A", -1, 3)),
            Err(SimError::InvalidArrival { arrival: -1, .. })
        ));
    }

    #[test]
    fn test_completion_time_overflow_rejected() {
        assert_eq!(
            validate_descriptor(&ProcessDescriptor::new("A", i64::MAX - 1, 5)),
            Err(SimError::TimeOverflow("A".into()))
        );
        assert!(validate_descriptor(&ProcessDescriptor::new("A", i64::MAX - 5, 5)).is_ok());

        // Each fits alone, but the second burst pushes the horizon past Time::MAX
        let combined = [
            ProcessDescriptor::new("A", 0, i64::MAX / 2 + 1),
            ProcessDescriptor::new("B", 0, i64::MAX / 2 + 1),
        ];
        assert_eq!(
            validate_snapshot(&combined),
            Err(SimError::TimeOverflow("B".into()))
        );

        // Late arrival plus earlier bursts
        let late = [
            ProcessDescriptor::new("A", 0, 10),
            ProcessDescriptor::new("B", i64::MAX - 12, 3),
        ];
        assert_eq!(
            validate_snapshot(&late),
            Err(SimError::TimeOverflow("B".into()))
        );
    }

    #[test]
    fn test_snapshot_validation() {
        assert_eq!(validate_snapshot(&[]), Err(SimError::EmptyRegistry));

        let dup = [
            ProcessDescriptor::new("A", 0, 1),
            ProcessDescriptor::new("B", 0, 1),
            ProcessDescriptor::new("A", 2, 1),
        ];
        assert_eq!(
            validate_snapshot(&dup),
            Err(SimError::DuplicateId("A".into()))
        );

        let ok = [
            ProcessDescriptor::new("A", 0, 1),
            ProcessDescriptor::new("B", 0, 1),
        ];
        assert!(validate_snapshot(&ok).is_ok());
    }
}
