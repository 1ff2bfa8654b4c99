/*!
 * Process Module
 * Process descriptors, validation, registry and persistence
 */

pub mod persistence;
pub mod registry;
pub mod types;
pub mod validation;

// Re-export public API
pub use registry::Registry;
pub use types::ProcessDescriptor;
pub use validation::{validate_descriptor, validate_snapshot};
