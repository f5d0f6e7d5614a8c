use async_trait::async_trait;

use crate::domain::{Order, PaymentMethod};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaymentGatewayError {
    /// The processor answered and refused.
    #[error("payment declined: {0}")]
    Declined(String),

    /// The processor could not be reached or is shedding load.
    #[error("payment gateway unavailable: {0}")]
    Unavailable(String),
}

/// Charges and refunds orders with an external payment processor.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge `order.amount()` using `method`.
    async fn pay(&self, order: &Order, method: PaymentMethod) -> Result<(), PaymentGatewayError>;

    /// Refund a previously successful charge. Only called for paid orders.
    async fn reverse(&self, order: &Order) -> Result<(), PaymentGatewayError>;
}
