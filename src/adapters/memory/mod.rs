// ============================================================================
// In-memory persistence
// ============================================================================
//
// Process-local stores behind the repository ports. Ids are assigned on
// create. Each store can be switched offline to simulate an outage.
//
// ============================================================================

mod orders;
mod records;
mod registry;
mod table;

pub use orders::InMemoryOrderRepository;
pub use records::{InMemoryDeliveryRepository, InMemoryPaymentRepository};
pub use registry::{
    InMemoryAttendantRepository, InMemoryCustomerRepository, InMemoryProductRepository,
};
