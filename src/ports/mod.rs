// ============================================================================
// Ports - Capabilities the orchestrator needs from the outside world
// ============================================================================
//
// - payment_gateway: charge and refund
// - kitchen:         preparation and pickup notifications
// - repositories:    persistence for every aggregate and reference record
//
// Every call here is an await point; the orchestrator suspends nowhere else.
//
// ============================================================================

pub mod payment_gateway;
pub mod kitchen;
pub mod repositories;

pub use payment_gateway::{PaymentGateway, PaymentGatewayError};
pub use kitchen::{Kitchen, KitchenError};
pub use repositories::{
    AttendantRepository, CustomerRepository, DeliveryRepository, OrderRepository,
    PaymentRepository, ProductRepository, RepositoryError,
};
