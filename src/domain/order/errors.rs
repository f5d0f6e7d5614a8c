use crate::domain::payment::{PaymentError, PaymentStatus};
use super::value_objects::{ItemId, OrderStatus};

// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Cannot {action} an order in status {status}")]
    InvalidStatusTransition {
        status: OrderStatus,
        action: &'static str,
    },

    #[error("Order items cannot be empty")]
    EmptyItems,

    #[error("Order amount must be greater than zero")]
    ZeroAmount,

    #[error("Invalid item quantity: {0}")]
    InvalidQuantity(i32),

    #[error("Item {0} does not belong to this order")]
    ItemNotFound(ItemId),

    #[error("Order payment is already settled")]
    AlreadyPaid,

    #[error("Payment in status {0} cannot take a charge")]
    PaymentNotChargeable(PaymentStatus),

    #[error(transparent)]
    Payment(#[from] PaymentError),
}
