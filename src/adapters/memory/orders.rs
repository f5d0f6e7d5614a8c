use std::cmp::Reverse;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::domain::{ItemId, Order, OrderId, OrderItem, OrderStatus};
use crate::ports::{OrderRepository, RepositoryError};

use super::table::Table;

/// Order store with optimistic version checks.
///
/// Every successful write bumps `version`; an update carrying an older
/// version is rejected with [`RepositoryError::Conflict`].
#[derive(Default)]
pub struct InMemoryOrderRepository {
    table: Table<Order>,
    last_item_id: AtomicU64,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every call with `Unavailable` until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.table.set_unavailable(unavailable);
    }

    /// Reject the next `count` writes with a storage error.
    pub fn fail_next_writes(&self, count: u32) {
        self.table.fail_next_writes(count);
    }

    fn assign_item_ids(&self, order: &mut Order) {
        for item in order.items.iter_mut().filter(|item| item.id == 0) {
            item.id = self.last_item_id.fetch_add(1, Ordering::SeqCst) + 1;
        }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: &Order) -> Result<Order, RepositoryError> {
        let mut order = order.clone();
        order.version = 1;
        self.assign_item_ids(&mut order);
        self.table.insert(order).await
    }

    async fn get_by_id(&self, id: OrderId) -> Result<Order, RepositoryError> {
        self.table.get(id).await
    }

    async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let mut orders: Vec<Order> = self
            .table
            .all()
            .await?
            .into_iter()
            .filter(|order| {
                !matches!(order.status, OrderStatus::Delivered | OrderStatus::Canceled)
            })
            .collect();

        orders.sort_by_key(|order| {
            (
                Reverse(order.created_at),
                Reverse(order.status.rank()),
                Reverse(order.id),
            )
        });
        Ok(orders)
    }

    async fn update(&self, order: &Order) -> Result<Order, RepositoryError> {
        let mut next = order.clone();
        self.assign_item_ids(&mut next);

        self.table
            .with_rows(|rows| {
                let stored = rows
                    .get_mut(&next.id)
                    .ok_or_else(|| RepositoryError::not_found("order", next.id))?;

                if stored.version != next.version {
                    return Err(RepositoryError::Conflict {
                        entity: "order",
                        id: next.id,
                        expected: next.version,
                        actual: stored.version,
                    });
                }

                next.version += 1;
                *stored = next.clone();
                Ok(next)
            })
            .await
    }

    async fn remove_item(&self, item_id: ItemId) -> Result<(), RepositoryError> {
        self.table
            .with_rows(|rows| {
                let order = rows
                    .values_mut()
                    .find(|order| order.items.iter().any(|item| item.id == item_id))
                    .ok_or_else(|| RepositoryError::not_found("order item", item_id))?;

                order.items.retain(|item| item.id != item_id);
                order.version += 1;
                order.updated_at = chrono::Utc::now();
                Ok(())
            })
            .await
    }

    async fn get_item_by_id(&self, item_id: ItemId) -> Result<OrderItem, RepositoryError> {
        self.table
            .all()
            .await?
            .into_iter()
            .flat_map(|order| order.items)
            .find(|item| item.id == item_id)
            .ok_or_else(|| RepositoryError::not_found("order item", item_id))
    }
}
