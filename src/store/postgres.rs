//! PostgreSQL-backed transaction store.
//!
//! Dynamic parts of the SQL (the WHERE clause of a listing, the SET list of
//! an update) are accumulated with `QueryBuilder`, one fragment per supplied
//! field. Values are always bound, never interpolated.

use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};

use super::{StoreResult, TransactionStore};
use crate::{
    db::DbPool,
    error::StoreError,
    models::{
        filter::{Clause, TransactionFilter},
        pagination::PageRequest,
        transaction::{NewTransaction, Transaction, TransactionChanges},
    },
};

const COLUMNS: &str = "id, amount, description, category, date, created_at";

/// Store implementation over a shared PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgTransactionStore {
    pool: DbPool,
}

impl PgTransactionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn insert_sql() -> String {
    format!(
        "INSERT INTO transactions (amount, description, category, date) \
         VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
    )
}

fn select_by_id_sql() -> String {
    format!("SELECT {COLUMNS} FROM transactions WHERE id = $1")
}

/// Append ` WHERE a AND b ...` for every clause of `filter`.
///
/// Nothing is appended for an empty filter.
fn push_filter(query: &mut QueryBuilder<'_, Postgres>, filter: &TransactionFilter) {
    let clauses = filter.clauses();
    if clauses.is_empty() {
        return;
    }

    query.push(" WHERE ");
    let mut conditions = query.separated(" AND ");
    for clause in clauses {
        match clause {
            Clause::CategoryEquals(category) => {
                conditions.push("category = ").push_bind_unseparated(category);
            }
            Clause::AmountAtLeast(min) => {
                conditions.push("amount >= ").push_bind_unseparated(min);
            }
            Clause::AmountAtMost(max) => {
                conditions.push("amount <= ").push_bind_unseparated(max);
            }
        }
    }
}

fn list_query(filter: &TransactionFilter, page: PageRequest) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("SELECT {COLUMNS} FROM transactions"));
    push_filter(&mut query, filter);

    // Offsets beyond i64 cannot match any row anyway
    let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);

    query
        .push(" ORDER BY date DESC, id DESC LIMIT ")
        .push_bind(i64::from(page.limit))
        .push(" OFFSET ")
        .push_bind(offset);
    query
}

fn count_query(filter: &TransactionFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new("SELECT COUNT(*) FROM transactions");
    push_filter(&mut query, filter);
    query
}

/// `None` when there is nothing to set.
fn update_query(id: i64, changes: &TransactionChanges) -> Option<QueryBuilder<'static, Postgres>> {
    if changes.is_empty() {
        return None;
    }

    let mut query = QueryBuilder::new("UPDATE transactions SET ");
    {
        let mut assignments = query.separated(", ");
        if let Some(amount) = changes.amount {
            assignments.push("amount = ").push_bind_unseparated(amount);
        }
        if let Some(ref description) = changes.description {
            assignments
                .push("description = ")
                .push_bind_unseparated(description.clone());
        }
        if let Some(ref category) = changes.category {
            assignments
                .push("category = ")
                .push_bind_unseparated(category.clone());
        }
        if let Some(date) = changes.date {
            assignments.push("date = ").push_bind_unseparated(date);
        }
    }
    query
        .push(" WHERE id = ")
        .push_bind(id)
        .push(format!(" RETURNING {COLUMNS}"));

    Some(query)
}

#[async_trait]
impl TransactionStore for PgTransactionStore {
    async fn create(&self, transaction: NewTransaction) -> StoreResult<Transaction> {
        let sql = insert_sql();
        let created = sqlx::query_as::<_, Transaction>(&sql)
            .bind(transaction.amount)
            .bind(transaction.description)
            .bind(transaction.category)
            .bind(transaction.date)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Transaction>> {
        let sql = select_by_id_sql();
        let transaction = sqlx::query_as::<_, Transaction>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(transaction)
    }

    async fn find_many(
        &self,
        filter: &TransactionFilter,
        page: PageRequest,
    ) -> StoreResult<Vec<Transaction>> {
        let mut query = list_query(filter, page);
        let transactions = query
            .build_query_as::<Transaction>()
            .fetch_all(&self.pool)
            .await?;

        Ok(transactions)
    }

    async fn count(&self, filter: &TransactionFilter) -> StoreResult<u64> {
        let mut query = count_query(filter);
        let count: i64 = query.build_query_scalar().fetch_one(&self.pool).await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn update(
        &self,
        id: i64,
        changes: &TransactionChanges,
    ) -> StoreResult<Option<Transaction>> {
        let Some(mut query) = update_query(id, changes) else {
            return self.find_by_id(id).await;
        };

        let updated = query
            .build_query_as::<Transaction>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let deleted = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        if self.pool.is_closed() {
            return Err(StoreError::Unavailable("connection pool is closed".to_string()));
        }
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
