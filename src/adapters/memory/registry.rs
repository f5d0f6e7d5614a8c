use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{
    Attendant, AttendantId, Cpf, Customer, CustomerId, Product, ProductId,
};
use crate::ports::{AttendantRepository, CustomerRepository, ProductRepository, RepositoryError};

use super::table::Table;

// ============================================================================
// Reference data: customers, attendants and the menu
// ============================================================================

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    table: Table<Customer>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.table.set_unavailable(unavailable);
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, customer: &Customer) -> Result<Customer, RepositoryError> {
        self.table.insert(customer.clone()).await
    }

    async fn get_by_id(&self, id: CustomerId) -> Result<Customer, RepositoryError> {
        self.table.get(id).await
    }

    async fn get_by_cpf(&self, cpf: &Cpf) -> Result<Customer, RepositoryError> {
        self.table
            .find(|customer| &customer.cpf == cpf)
            .await?
            .ok_or_else(|| RepositoryError::not_found("customer", cpf.as_str()))
    }

    async fn list(&self) -> Result<Vec<Customer>, RepositoryError> {
        self.table.all().await
    }

    async fn update(&self, customer: &Customer) -> Result<Customer, RepositoryError> {
        let mut customer = customer.clone();
        customer.updated_at = Utc::now();
        self.table.replace(customer).await
    }

    async fn delete(&self, id: CustomerId) -> Result<(), RepositoryError> {
        self.table.delete(id).await
    }
}

#[derive(Default)]
pub struct InMemoryAttendantRepository {
    table: Table<Attendant>,
}

impl InMemoryAttendantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.table.set_unavailable(unavailable);
    }
}

#[async_trait]
impl AttendantRepository for InMemoryAttendantRepository {
    async fn create(&self, attendant: &Attendant) -> Result<Attendant, RepositoryError> {
        self.table.insert(attendant.clone()).await
    }

    async fn get_by_id(&self, id: AttendantId) -> Result<Attendant, RepositoryError> {
        self.table.get(id).await
    }

    async fn get_by_name(&self, name: &str) -> Result<Attendant, RepositoryError> {
        self.table
            .find(|attendant| attendant.name == name)
            .await?
            .ok_or_else(|| RepositoryError::not_found("attendant", name))
    }

    async fn list(&self) -> Result<Vec<Attendant>, RepositoryError> {
        self.table.all().await
    }

    async fn update(&self, attendant: &Attendant) -> Result<Attendant, RepositoryError> {
        let mut attendant = attendant.clone();
        attendant.updated_at = Utc::now();
        self.table.replace(attendant).await
    }

    async fn delete(&self, id: AttendantId) -> Result<(), RepositoryError> {
        self.table.delete(id).await
    }
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    table: Table<Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.table.set_unavailable(unavailable);
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: &Product) -> Result<Product, RepositoryError> {
        self.table.insert(product.clone()).await
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.table.get(id).await
    }

    async fn get_by_name(&self, name: &str) -> Result<Product, RepositoryError> {
        self.table
            .find(|product| product.name == name)
            .await?
            .ok_or_else(|| RepositoryError::not_found("product", name))
    }

    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        self.table.all().await
    }

    async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut product = product.clone();
        product.updated_at = Utc::now();
        self.table.replace(product).await
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        self.table.delete(id).await
    }
}
