/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process identifier (unique key within a registry)
pub type Pid = String;

/// Simulation time in abstract units
pub type Time = i64;

/// Priority level (lower value = higher precedence)
pub type Priority = i32;

/// Priority assigned when a record omits one
pub const DEFAULT_PRIORITY: Priority = 0;

/// Round Robin quantum used when none is configured
pub const DEFAULT_QUANTUM: Time = 2;
