use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, MutexGuard, PoisonError};

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::OrderId;

// ============================================================================
// Per-Order Lock Table
// ============================================================================
//
// One async mutex per order ID that currently has a holder or a waiter.
// Operations on the same order queue up; different orders never contend
// beyond the short table lookup. Entries are dropped once nobody references
// them; a waiter whose future is dropped cannot clean up after itself, so
// `acquire` also sweeps entries left with no holder.
//
// ============================================================================

type Table = Arc<StdMutex<HashMap<OrderId, Arc<Mutex<()>>>>>;

#[derive(Clone, Default)]
pub struct OrderLocks {
    table: Table,
}

/// Exclusive access to one order until dropped.
pub struct OrderLockGuard {
    order_id: OrderId,
    guard: Option<OwnedMutexGuard<()>>,
    table: Table,
}

fn lock_table(table: &Table) -> MutexGuard<'_, HashMap<OrderId, Arc<Mutex<()>>>> {
    // The map stays consistent even if a holder panicked.
    table.lock().unwrap_or_else(PoisonError::into_inner)
}

impl OrderLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, order_id: OrderId) -> OrderLockGuard {
        let lock = {
            let mut table = lock_table(&self.table);
            table.retain(|_, lock| Arc::strong_count(lock) > 1);
            Arc::clone(table.entry(order_id).or_default())
        };

        let guard = lock.lock_owned().await;

        OrderLockGuard {
            order_id,
            guard: Some(guard),
            table: Arc::clone(&self.table),
        }
    }

    /// Number of orders with a holder or waiter.
    pub fn active(&self) -> usize {
        lock_table(&self.table).len()
    }
}

impl OrderLockGuard {
    pub fn order_id(&self) -> OrderId {
        self.order_id
    }
}

impl Drop for OrderLockGuard {
    fn drop(&mut self) {
        drop(self.guard.take());

        let mut table = lock_table(&self.table);
        let unused = table
            .get(&self.order_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1);
        if unused {
            table.remove(&self.order_id);
        }
    }
}
