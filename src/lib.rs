//! Food order lifecycle orchestration.
//!
//! An [`OrderOrchestrator`](orchestrator::OrderOrchestrator) moves orders
//! from creation through payment, kitchen preparation and hand-over (or
//! cancellation), keeping each order consistent with what the payment
//! gateway and the kitchen actually did. Collaborators are reached through
//! the traits in [`ports`]; [`adapters`] holds in-memory and simulated
//! implementations.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod orchestrator;
pub mod ports;
pub mod utils;
