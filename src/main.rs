/*!
 * CPU Scheduling Simulator - Command Line Entry Point
 *
 * Usage: sched-sim <processes.json> [fcfs|sjf|rr|priority|compare] [quantum]
 *
 * Positional arguments override SCHED_POLICY / SCHED_QUANTUM.
 */

use cpu_sched_sim::monitoring::SimulationSpan;
use cpu_sched_sim::process::persistence;
use cpu_sched_sim::scheduler::parse_quantum;
use cpu_sched_sim::{
    compare, init_tracing, PolicyKind, SimulationConfig, SimulationRun, Timeline,
};
use miette::{miette, Result};
use tracing::info;

const USAGE: &str = "usage: sched-sim <processes.json> [fcfs|sjf|rr|priority|compare] [quantum]";

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or_else(|| miette!("{}", USAGE))?;
    let mode = args.next();
    let quantum_arg = args.next();

    let mut config = SimulationConfig::from_env()?;
    if let Some(raw) = quantum_arg {
        config.quantum = Some(parse_quantum(&raw)?);
    }

    let registry = persistence::load_file(&path)?;
    let snapshot = registry.snapshot();
    info!(path = %path, processes = snapshot.len(), "Loaded process list");

    match mode.as_deref() {
        Some("compare") => {
            let span = SimulationSpan::new("compare", snapshot.len());
            let runs = {
                let _guard = span.enter();
                compare(&snapshot, config.quantum()?)?
            };
            for run in &runs {
                println!(
                    "{:<24} wait={:>7.2}  response={:>7.2}  turnaround={:>7.2}  cpu={:>6.2}%",
                    run.policy.to_string(),
                    run.metrics.avg_wait,
                    run.metrics.avg_response,
                    run.metrics.avg_turnaround,
                    run.metrics.cpu_utilization_percent
                );
            }
        }
        other => {
            if let Some(name) = other {
                config.policy = PolicyKind::from_str(name)?;
            }
            let policy = config.policy()?;
            let span = SimulationSpan::new(policy.kind().as_str(), snapshot.len());
            let run = {
                let _guard = span.enter();
                SimulationRun::execute(policy, &snapshot)?
            };

            println!("Policy: {}", run.policy);
            print_timeline(&run.timeline);
            println!();
            println!("{}", run.metrics);
        }
    }

    Ok(())
}

fn print_timeline(timeline: &Timeline) {
    println!("Timeline:");
    for event in timeline {
        println!(
            "  [{:>4}, {:>4})  {}",
            event.start, event.end, event.process
        );
    }
}
