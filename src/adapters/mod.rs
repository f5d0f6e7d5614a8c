// ============================================================================
// Adapters - Port implementations
// ============================================================================
//
// - memory:    process-local repositories
// - simulated: scripted payment gateway and kitchen
// - resilient: circuit-breaker wrappers for the collaborator ports
//
// ============================================================================

pub mod memory;
pub mod resilient;
pub mod simulated;

pub use resilient::{ResilientKitchen, ResilientPaymentGateway};
pub use simulated::{SimulatedKitchen, SimulatedPaymentGateway};
