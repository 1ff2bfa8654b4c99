/*!
 * Metrics Module
 * Performance metrics derived from a scheduling timeline
 */

pub mod calculator;
pub mod types;

pub use calculator::compute_metrics;
pub use types::{Metrics, ProcessMetrics};
