use async_trait::async_trait;

use crate::domain::{
    Attendant, AttendantId, Cpf, Customer, CustomerId, Delivery, DeliveryId, ItemId, Order,
    OrderId, OrderItem, Payment, PaymentId, Product, ProductId,
};
use crate::utils::IsTransient;

// ============================================================================
// Persistence Ports
// ============================================================================
//
// One trait per stored record type. `create` assigns identities (ids of 0 are
// replaced), `update` returns what was actually stored.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("{entity} {id} was modified concurrently (expected version {expected}, found {actual})")]
    Conflict {
        entity: &'static str,
        id: u64,
        expected: u64,
        actual: u64,
    },

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        RepositoryError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

impl IsTransient for RepositoryError {
    fn is_transient(&self) -> bool {
        matches!(self, RepositoryError::Unavailable(_))
    }
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, order: &Order) -> Result<Order, RepositoryError>;
    async fn get_by_id(&self, id: OrderId) -> Result<Order, RepositoryError>;
    /// Orders not yet delivered or canceled, newest first, then status descending.
    async fn list(&self) -> Result<Vec<Order>, RepositoryError>;
    /// Rejects the write with `Conflict` when `order.version` is stale.
    async fn update(&self, order: &Order) -> Result<Order, RepositoryError>;
    async fn remove_item(&self, item_id: ItemId) -> Result<(), RepositoryError>;
    async fn get_item_by_id(&self, item_id: ItemId) -> Result<OrderItem, RepositoryError>;
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn create(&self, payment: &Payment) -> Result<Payment, RepositoryError>;
    async fn get_by_id(&self, id: PaymentId) -> Result<Payment, RepositoryError>;
    async fn update(&self, payment: &Payment) -> Result<Payment, RepositoryError>;
}

#[async_trait]
pub trait DeliveryRepository: Send + Sync {
    async fn create(&self, delivery: &Delivery) -> Result<Delivery, RepositoryError>;
    async fn get_by_id(&self, id: DeliveryId) -> Result<Delivery, RepositoryError>;
    async fn update(&self, delivery: &Delivery) -> Result<Delivery, RepositoryError>;
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create(&self, customer: &Customer) -> Result<Customer, RepositoryError>;
    async fn get_by_id(&self, id: CustomerId) -> Result<Customer, RepositoryError>;
    async fn get_by_cpf(&self, cpf: &Cpf) -> Result<Customer, RepositoryError>;
    async fn list(&self) -> Result<Vec<Customer>, RepositoryError>;
    async fn update(&self, customer: &Customer) -> Result<Customer, RepositoryError>;
    async fn delete(&self, id: CustomerId) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait AttendantRepository: Send + Sync {
    async fn create(&self, attendant: &Attendant) -> Result<Attendant, RepositoryError>;
    async fn get_by_id(&self, id: AttendantId) -> Result<Attendant, RepositoryError>;
    async fn get_by_name(&self, name: &str) -> Result<Attendant, RepositoryError>;
    async fn list(&self) -> Result<Vec<Attendant>, RepositoryError>;
    async fn update(&self, attendant: &Attendant) -> Result<Attendant, RepositoryError>;
    async fn delete(&self, id: AttendantId) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    async fn get_by_name(&self, name: &str) -> Result<Product, RepositoryError>;
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
