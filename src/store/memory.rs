//! In-memory store used by the service and router tests.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::{StoreResult, TransactionStore};
use crate::{
    error::StoreError,
    models::{
        filter::TransactionFilter,
        pagination::PageRequest,
        transaction::{NewTransaction, Transaction, TransactionChanges},
    },
};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Transaction>,
    next_id: i64,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    table: Mutex<Table>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with [`StoreError::Unavailable`].
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    pub async fn row_count(&self) -> usize {
        self.table.lock().await.rows.len()
    }

    fn check_online(&self) -> StoreResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn create(&self, transaction: NewTransaction) -> StoreResult<Transaction> {
        self.check_online()?;
        let mut table = self.table.lock().await;
        table.next_id += 1;

        let created = Transaction {
            id: table.next_id,
            amount: transaction.amount,
            description: transaction.description,
            category: transaction.category,
            date: transaction.date,
            created_at: Utc::now(),
        };
        table.rows.push(created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Transaction>> {
        self.check_online()?;
        let table = self.table.lock().await;
        Ok(table.rows.iter().find(|row| row.id == id).cloned())
    }

    async fn find_many(
        &self,
        filter: &TransactionFilter,
        page: PageRequest,
    ) -> StoreResult<Vec<Transaction>> {
        self.check_online()?;
        let table = self.table.lock().await;

        let mut matching: Vec<Transaction> = table
            .rows
            .iter()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

        let skip = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        Ok(matching
            .into_iter()
            .skip(skip)
            .take(page.limit as usize)
            .collect())
    }

    async fn count(&self, filter: &TransactionFilter) -> StoreResult<u64> {
        self.check_online()?;
        let table = self.table.lock().await;
        Ok(table.rows.iter().filter(|row| filter.matches(row)).count() as u64)
    }

    async fn update(
        &self,
        id: i64,
        changes: &TransactionChanges,
    ) -> StoreResult<Option<Transaction>> {
        self.check_online()?;
        let mut table = self.table.lock().await;

        Ok(table.rows.iter_mut().find(|row| row.id == id).map(|row| {
            changes.apply_to(row);
            row.clone()
        }))
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        self.check_online()?;
        let mut table = self.table.lock().await;
        let before = table.rows.len();
        table.rows.retain(|row| row.id != id);
        Ok(table.rows.len() < before)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check_online()
    }
}
