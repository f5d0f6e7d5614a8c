use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Delivery, DeliveryId, Payment, PaymentId};
use crate::ports::{DeliveryRepository, PaymentRepository, RepositoryError};

use super::table::Table;

#[derive(Default)]
pub struct InMemoryPaymentRepository {
    table: Table<Payment>,
}

impl InMemoryPaymentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.table.set_unavailable(unavailable);
    }

    pub fn fail_next_writes(&self, count: u32) {
        self.table.fail_next_writes(count);
    }

    /// Every payment attempt recorded, oldest first.
    pub async fn all(&self) -> Result<Vec<Payment>, RepositoryError> {
        self.table.all().await
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
    async fn create(&self, payment: &Payment) -> Result<Payment, RepositoryError> {
        self.table.insert(payment.clone()).await
    }

    async fn get_by_id(&self, id: PaymentId) -> Result<Payment, RepositoryError> {
        self.table.get(id).await
    }

    async fn update(&self, payment: &Payment) -> Result<Payment, RepositoryError> {
        let mut payment = payment.clone();
        payment.updated_at = Utc::now();
        self.table.replace(payment).await
    }
}

#[derive(Default)]
pub struct InMemoryDeliveryRepository {
    table: Table<Delivery>,
}

impl InMemoryDeliveryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.table.set_unavailable(unavailable);
    }

    /// Every delivery recorded, oldest first.
    pub async fn all(&self) -> Result<Vec<Delivery>, RepositoryError> {
        self.table.all().await
    }
}

#[async_trait]
impl DeliveryRepository for InMemoryDeliveryRepository {
    async fn create(&self, delivery: &Delivery) -> Result<Delivery, RepositoryError> {
        self.table.insert(delivery.clone()).await
    }

    async fn get_by_id(&self, id: DeliveryId) -> Result<Delivery, RepositoryError> {
        self.table.get(id).await
    }

    async fn update(&self, delivery: &Delivery) -> Result<Delivery, RepositoryError> {
        let mut delivery = delivery.clone();
        delivery.updated_at = Utc::now();
        self.table.replace(delivery).await
    }
}
