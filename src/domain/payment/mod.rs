// ============================================================================
// Payment Domain - Payment record embedded in an order
// ============================================================================
//
// - Value objects (PaymentStatus, PaymentMethod)
// - Errors (PaymentError)
// - Entity (Payment with its monotonic status machine)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod entity;

pub use value_objects::*;
pub use errors::*;
pub use entity::*;
