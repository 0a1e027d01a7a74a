//! Persistence seam for transactions.
//!
//! Services talk to a [`TransactionStore`] trait object so the database can
//! be swapped for a substitute in tests. "Not found" is a regular outcome of
//! the API (`Option`/`bool`), never an error variant.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::StoreError,
    models::{
        filter::TransactionFilter,
        pagination::PageRequest,
        transaction::{NewTransaction, Transaction, TransactionChanges},
    },
};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub type StoreResult<T> = Result<T, StoreError>;

/// Shared handle to the store, cloned into every request.
pub type SharedStore = Arc<dyn TransactionStore>;

#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Insert a record; the store assigns `id` and `created_at`.
    async fn create(&self, transaction: NewTransaction) -> StoreResult<Transaction>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Transaction>>;

    /// Records matching `filter`, newest `date` first, restricted to `page`.
    async fn find_many(
        &self,
        filter: &TransactionFilter,
        page: PageRequest,
    ) -> StoreResult<Vec<Transaction>>;

    /// Number of records matching `filter`, ignoring pagination.
    async fn count(&self, filter: &TransactionFilter) -> StoreResult<u64>;

    /// Apply `changes` to the record with `id`. `None` if it does not exist.
    async fn update(
        &self,
        id: i64,
        changes: &TransactionChanges,
    ) -> StoreResult<Option<Transaction>>;

    /// Remove the record with `id`. `false` if it did not exist.
    async fn delete(&self, id: i64) -> StoreResult<bool>;

    /// Check that the store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
