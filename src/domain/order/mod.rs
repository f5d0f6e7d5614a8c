// ============================================================================
// Order Domain - Business Logic for the Order Aggregate
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (OrderItem, OrderStatus, identifiers)
// - Commands (AddItem, Pay, Cancel, etc.)
// - Errors (OrderError enum)
// - Aggregate (Order with amount computation and guarded transitions)
//
// Side effects (payment, kitchen, persistence) live in the orchestrator.
//
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod errors;
pub mod aggregate;

// Re-export for convenience
pub use value_objects::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
