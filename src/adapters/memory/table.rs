use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::domain::{Attendant, Customer, Delivery, Order, Payment, Product};
use crate::ports::RepositoryError;

/// Stored record with a numeric identity.
pub(crate) trait Record: Clone + Send + Sync {
    const ENTITY: &'static str;

    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
}

macro_rules! record {
    ($ty:ty, $entity:literal) => {
        impl Record for $ty {
            const ENTITY: &'static str = $entity;

            fn id(&self) -> u64 {
                self.id
            }

            fn set_id(&mut self, id: u64) {
                self.id = id;
            }
        }
    };
}

record!(Order, "order");
record!(Payment, "payment");
record!(Delivery, "delivery");
record!(Customer, "customer");
record!(Attendant, "attendant");
record!(Product, "product");

/// Rows keyed by id, plus switches for simulating outages.
pub(crate) struct Table<T> {
    rows: RwLock<BTreeMap<u64, T>>,
    last_id: AtomicU64,
    unavailable: AtomicBool,
    failing_writes: AtomicU32,
}

impl<T: Record> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            last_id: AtomicU64::new(0),
            unavailable: AtomicBool::new(false),
            failing_writes: AtomicU32::new(0),
        }
    }
}

impl<T: Record> Table<T> {
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn fail_next_writes(&self, count: u32) {
        self.failing_writes.store(count, Ordering::SeqCst);
    }

    pub fn check(&self) -> Result<(), RepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable(format!(
                "{} store is offline",
                T::ENTITY
            )));
        }
        Ok(())
    }

    pub fn check_write(&self) -> Result<(), RepositoryError> {
        self.check()?;
        let injected = self
            .failing_writes
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if injected {
            return Err(RepositoryError::Storage(format!(
                "{} write rejected",
                T::ENTITY
            )));
        }
        Ok(())
    }

    pub fn next_id(&self) -> u64 {
        self.last_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Store a new row; an id of 0 gets the next free id.
    pub async fn insert(&self, mut record: T) -> Result<T, RepositoryError> {
        self.check_write()?;

        if record.id() == 0 {
            record.set_id(self.next_id());
        } else {
            self.last_id.fetch_max(record.id(), Ordering::SeqCst);
        }

        self.rows.write().await.insert(record.id(), record.clone());
        Ok(record)
    }

    pub async fn get(&self, id: u64) -> Result<T, RepositoryError> {
        self.check()?;
        self.rows
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(T::ENTITY, id))
    }

    pub async fn replace(&self, record: T) -> Result<T, RepositoryError> {
        self.check_write()?;
        let mut rows = self.rows.write().await;
        match rows.get_mut(&record.id()) {
            Some(row) => {
                *row = record.clone();
                Ok(record)
            }
            None => Err(RepositoryError::not_found(T::ENTITY, record.id())),
        }
    }

    pub async fn delete(&self, id: u64) -> Result<(), RepositoryError> {
        self.check_write()?;
        self.rows
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found(T::ENTITY, id))
    }

    pub async fn all(&self) -> Result<Vec<T>, RepositoryError> {
        self.check()?;
        Ok(self.rows.read().await.values().cloned().collect())
    }

    pub async fn find(&self, predicate: impl Fn(&T) -> bool) -> Result<Option<T>, RepositoryError> {
        self.check()?;
        Ok(self.rows.read().await.values().find(|row| predicate(row)).cloned())
    }

    /// Run `f` against the whole table under the write lock.
    pub async fn with_rows<R>(
        &self,
        f: impl FnOnce(&mut BTreeMap<u64, T>) -> Result<R, RepositoryError>,
    ) -> Result<R, RepositoryError> {
        self.check_write()?;
        let mut rows = self.rows.write().await;
        f(&mut rows)
    }
}
