/*!
 * Process Registry
 * Insertion-ordered collection of validated, uniquely keyed descriptors
 */

use super::types::ProcessDescriptor;
use super::validation::{validate_descriptor, validate_snapshot};
use crate::core::errors::{SimError, SimResult};
use tracing::{debug, warn};

/// Process registry
///
/// Every mutation is all-or-nothing: a rejected call leaves the registry
/// exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    processes: Vec<ProcessDescriptor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from records, validating all of them
    pub fn from_records(records: Vec<ProcessDescriptor>) -> SimResult<Self> {
        let mut registry = Self::new();
        registry.replace_all(records)?;
        Ok(registry)
    }

    /// Add a descriptor at the end of the registry
    pub fn add(&mut self, desc: ProcessDescriptor) -> SimResult<()> {
        if let Err(e) = self.check_insert(&desc, None) {
            warn!(id = %desc.id, error = %e, "Rejected process descriptor");
            return Err(e);
        }

        debug!(
            id = %desc.id,
            arrival = desc.arrival,
            burst = desc.burst,
            priority = desc.priority,
            "Process added"
        );
        self.processes.push(desc);
        Ok(())
    }

    /// Remove a descriptor by id, returning it if present
    pub fn remove(&mut self, id: &str) -> Option<ProcessDescriptor> {
        let pos = self.position(id)?;
        debug!(id, "Process removed");
        Some(self.processes.remove(pos))
    }

    /// Replace the descriptor stored under `id`, keeping its position
    pub fn update(&mut self, id: &str, desc: ProcessDescriptor) -> SimResult<()> {
        let pos = self
            .position(id)
            .ok_or_else(|| SimError::UnknownProcess(id.to_string()))?;

        if let Err(e) = self.check_insert(&desc, Some(pos)) {
            warn!(id, error = %e, "Rejected process update");
            return Err(e);
        }

        debug!(old_id = id, new_id = %desc.id, "Process updated");
        self.processes[pos] = desc;
        Ok(())
    }

    /// Remove every descriptor
    pub fn clear(&mut self) {
        self.processes.clear();
    }

    /// Swap in a whole new set of descriptors after validating all of them
    pub fn replace_all(&mut self, records: Vec<ProcessDescriptor>) -> SimResult<()> {
        if !records.is_empty() {
            validate_snapshot(&records)?;
        }
        self.processes = records;
        Ok(())
    }

    /// Insertion-ordered view of the registry
    pub fn list(&self) -> &[ProcessDescriptor] {
        &self.processes
    }

    /// Owned copy for a scheduling run
    pub fn snapshot(&self) -> Vec<ProcessDescriptor> {
        self.processes.clone()
    }

    pub fn get(&self, id: &str) -> Option<&ProcessDescriptor> {
        self.processes.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Suggested id for the next process entered by the user
    ///
    /// One past the highest all-digit id, or `len + 1` when no id is numeric.
    pub fn suggest_next_id(&self) -> String {
        self.processes
            .iter()
            .filter(|p| !p.id.is_empty() && p.id.bytes().all(|b| b.is_ascii_digit()))
            .filter_map(|p| p.id.parse::<u64>().ok())
            .max()
            .map(|max| max.saturating_add(1))
            .unwrap_or(self.processes.len() as u64 + 1)
            .to_string()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.processes.iter().position(|p| p.id == id)
    }

    /// Validate `desc` for insertion, ignoring the slot at `skip`
    fn check_insert(&self, desc: &ProcessDescriptor, skip: Option<usize>) -> SimResult<()> {
        validate_descriptor(desc)?;

        let collides = self
            .processes
            .iter()
            .enumerate()
            .any(|(i, p)| Some(i) != skip && p.id == desc.id);
        if collides {
            return Err(SimError::DuplicateId(desc.id.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_list_preserves_order() {
        let mut registry = Registry::new();
        registry.add(ProcessDescriptor::new("B", 3, 2)).unwrap();
        registry.add(ProcessDescriptor::new("A", 0, 5)).unwrap();

        let ids: Vec<&str> = registry.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }

    #[test]
    fn test_add_rejects_invalid() {
        let mut registry = Registry::new();
        registry.add(ProcessDescriptor::new("A", 0, 5)).unwrap();

        assert_eq!(
            registry.add(ProcessDescriptor::new("A", 1, 2)),
            Err(SimError::DuplicateId("A".into()))
        );
        assert!(matches!(
            registry.add(ProcessDescriptor::new("B", 0, 0)),
            Err(SimError::InvalidBurst { .. })
        ));
        assert!(matches!(
            registry.add(ProcessDescriptor::new("C", -2, 1)),
            Err(SimError::InvalidArrival { .. })
        ));
        assert_eq!(
            registry.add(ProcessDescriptor::new("D", i64::MAX - 1, 5)),
            Err(SimError::TimeOverflow("D".into()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut registry = Registry::new();
        registry.add(ProcessDescriptor::new("A", 0, 5)).unwrap();
        registry.add(ProcessDescriptor::new("B", 0, 5)).unwrap();

        assert_eq!(registry.remove("A").map(|p| p.id), Some("A".to_string()));
        assert!(registry.remove("A").is_none());
        assert_eq!(registry.len(), 1);

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_update_keeps_position() {
        let mut registry = Registry::new();
        registry.add(ProcessDescriptor::new("A", 0, 5)).unwrap();
        registry.add(ProcessDescriptor::new("B", 1, 2)).unwrap();
        registry.add(ProcessDescriptor::new("C", 2, 2)).unwrap();

        registry
            .update("B", ProcessDescriptor::new("B2", 4, 9).with_priority(1))
            .unwrap();
        let ids: Vec<&str> = registry.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B2", "C"]);

        // Same id is fine, another process's id is not
        assert!(registry.update("B2", ProcessDescriptor::new("B2", 0, 1)).is_ok());
        assert_eq!(
            registry.update("B2", ProcessDescriptor::new("C", 0, 1)),
            Err(SimError::DuplicateId("C".into()))
        );
        assert_eq!(registry.get("B2").map(|p| p.burst), Some(1));

        assert!(matches!(
            registry.update("missing", ProcessDescriptor::new("X", 0, 1)),
            Err(SimError::UnknownProcess(_))
        ));
    }

    #[test]
    fn test_replace_all_is_atomic() {
        let mut registry = Registry::new();
        registry.add(ProcessDescriptor::new("keep", 0, 1)).unwrap();

        let bad = vec![
            ProcessDescriptor::new("A", 0, 1),
            ProcessDescriptor::new("A", 1, 1),
        ];
        assert!(registry.replace_all(bad).is_err());
        assert_eq!(registry.list()[0].id, "keep");

        let good = vec![
            ProcessDescriptor::new("A", 0, 1),
            ProcessDescriptor::new("B", 1, 1),
        ];
        registry.replace_all(good).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_suggest_next_id() {
        let mut registry = Registry::new();
        assert_eq!(registry.suggest_next_id(), "1");

        registry.add(ProcessDescriptor::new("1", 0, 1)).unwrap();
        registry.add(ProcessDescriptor::new("7", 0, 1)).unwrap();
        registry.add(ProcessDescriptor::new("x", 0, 1)).unwrap();
        assert_eq!(registry.suggest_next_id(), "8");

        let named = Registry::from_records(vec![
            ProcessDescriptor::new("a", 0, 1),
            ProcessDescriptor::new("b", 0, 1),
        ])
        .unwrap();
        assert_eq!(named.suggest_next_id(), "3");
    }
}
