// ============================================================================
// Orchestrator - Drives orders through their lifecycle
// ============================================================================
//
// - service: lifecycle commands and queries
// - errors:  failure kinds, each carrying the order snapshot
// - locks:   per-order serialization
//
// ============================================================================

mod errors;
mod locks;
mod service;

#[cfg(test)]
mod tests;

pub use errors::{OrchestratorError, SideEffect};
pub use locks::{OrderLockGuard, OrderLocks};
pub use service::{OrchestratorPorts, OrderOrchestrator};
