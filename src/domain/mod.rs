// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Entities and value objects for the food order lifecycle.
// Each aggregate with real behaviour has its own subdirectory with:
// - Value objects
// - Commands
// - Errors
// - Aggregate/entity implementation
//
// Reference data (customers, attendants, products) is plain data owned by
// the persistence collaborators; the orchestrator only reads it.
//
// ============================================================================

pub mod order;
pub mod payment;
pub mod delivery;
pub mod customer;
pub mod attendant;
pub mod product;

pub use order::{ItemId, Order, OrderCommand, OrderError, OrderId, OrderItem, OrderStatus};
pub use payment::{Payment, PaymentError, PaymentId, PaymentMethod, PaymentStatus};
pub use delivery::{Delivery, DeliveryId, DeliveryStatus};
pub use customer::{Cpf, Customer, CustomerId, Email};
pub use attendant::{Attendant, AttendantId};
pub use product::{Category, Product, ProductId};
