use async_trait::async_trait;

use crate::domain::{Order, OrderId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KitchenError {
    #[error("kitchen rejected request: {0}")]
    Rejected(String),

    #[error("kitchen unavailable: {0}")]
    Unavailable(String),
}

/// Food preparation service.
#[async_trait]
pub trait Kitchen: Send + Sync {
    /// Ask the kitchen to start preparing a paid order.
    async fn preparation(&self, order: &Order) -> Result<(), KitchenError>;

    /// Tell the kitchen the order left the pass for pickup.
    async fn ready_delivery(&self, order_id: OrderId) -> Result<(), KitchenError>;
}
