/*!
 * Scheduler Module
 * Dispatch policies turning a process snapshot into a timeline
 */

pub mod compare;
pub mod fcfs;
pub mod priority;
mod queue;
pub mod round_robin;
pub mod sjf;
pub mod timeline;
pub mod traits;
pub mod types;

use crate::core::errors::SimResult;
use crate::process::{validate_snapshot, ProcessDescriptor};
use tracing::{info, instrument};

// Re-export public API
pub use compare::{compare, SimulationRun};
pub use fcfs::Fcfs;
pub use priority::PriorityPreemptive;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use timeline::{Timeline, TimelineEvent};
pub use traits::SchedulingAlgorithm;
pub use types::{parse_quantum, PolicyKind, SchedulerPolicy, SimulationConfig, TimeQuantum};

/// Run one policy over a snapshot
///
/// The snapshot is validated first (non-empty, unique ids, positive bursts,
/// non-negative arrivals); past that point every policy terminates with a
/// well-formed timeline.
#[instrument(level = "debug", skip_all, fields(policy = %policy, processes = snapshot.len()))]
pub fn schedule(policy: &SchedulerPolicy, snapshot: &[ProcessDescriptor]) -> SimResult<Timeline> {
    validate_snapshot(snapshot)?;

    let timeline = match *policy {
        SchedulerPolicy::Fcfs => Fcfs.run(snapshot),
        SchedulerPolicy::Sjf => Sjf.run(snapshot),
        SchedulerPolicy::RoundRobin { quantum } => RoundRobin::new(quantum).run(snapshot),
        SchedulerPolicy::Priority => PriorityPreemptive.run(snapshot),
    };

    info!(
        policy = policy.kind().as_str(),
        events = timeline.len(),
        makespan = timeline.makespan(),
        "Simulation complete"
    );
    Ok(timeline)
}
