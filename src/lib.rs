/*!
 * CPU Scheduling Simulator Library
 * Process registry, dispatch policies and performance metrics
 */

pub mod core;
pub mod metrics;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::{ErrorKind, Pid, Priority, SimError, SimResult, Time};
pub use metrics::{compute_metrics, Metrics, ProcessMetrics};
pub use monitoring::init_tracing;
pub use process::{ProcessDescriptor, Registry};
pub use scheduler::{
    compare, schedule, PolicyKind, SchedulerPolicy, SimulationConfig, SimulationRun, TimeQuantum,
    Timeline, TimelineEvent,
};
