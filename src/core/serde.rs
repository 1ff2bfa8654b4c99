/*!
 * Serde Helpers
 * Shared defaults and skip predicates for serialized types
 */

use super::types::{Priority, DEFAULT_PRIORITY};

/// Default priority for records that omit the field
pub fn default_priority() -> Priority {
    DEFAULT_PRIORITY
}

/// Skip serializing if value is None (for use with skip_serializing_if)
pub fn is_none<T>(value: &Option<T>) -> bool {
    value.is_none()
}
