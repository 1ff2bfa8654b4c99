/*!
 * Monitoring
 * Tracing setup and simulation spans
 */

mod tracer;

pub use tracer::{init_tracing, try_init_tracing, SimulationSpan};
