//! Transaction service - Core logic for the transaction CRUD API.
//!
//! This service handles:
//! - Presence validation of request fields
//! - Building list filters and partial-update change sets
//! - Pagination arithmetic for listings
//! - Mapping "not found" store outcomes to `AppError::NotFound`
//!
//! # Presence Rules
//!
//! A field counts as supplied only when it is present and truthy: strings
//! must be non-empty and `amount` must be non-zero. A zero amount is
//! therefore rejected on create and ignored on update.

use crate::{
    error::AppError,
    models::{
        filter::TransactionFilter,
        pagination::{ListTransactionsQuery, PageRequest, PaginationConfig, TransactionPage},
        transaction::{
            CreateTransactionRequest, NewTransaction, Transaction, TransactionChanges,
            UpdateTransactionRequest, parse_date, supplied_amount, supplied_text,
        },
    },
    store::TransactionStore,
};

/// Parse a path id. Missing, empty or non-integer ids are validation errors.
pub fn parse_id(raw: Option<&str>) -> Result<i64, AppError> {
    let raw = raw
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::Validation("Transaction id is required".to_string()))?;

    raw.parse::<i64>()
        .map_err(|_| AppError::Validation(format!("Invalid transaction id: {raw}")))
}

fn parse_date_field(raw: &str) -> Result<chrono::DateTime<chrono::Utc>, AppError> {
    parse_date(raw).ok_or_else(|| AppError::Validation(format!("Invalid date: {raw}")))
}

fn parse_amount_bound(name: &str, raw: Option<&str>) -> Result<Option<f64>, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(AppError::Validation(format!("{name} must be a number"))),
    }
}

/// Build the list filter from the query string.
///
/// Each parameter becomes a constraint only when it was supplied with a
/// non-empty value.
pub fn build_filter(query: &ListTransactionsQuery) -> Result<TransactionFilter, AppError> {
    Ok(TransactionFilter {
        category: supplied_text(query.category.clone()),
        min_amount: parse_amount_bound("minAmount", query.min_amount.as_deref())?,
        max_amount: parse_amount_bound("maxAmount", query.max_amount.as_deref())?,
    })
}

/// Build the change set for a partial update from the supplied fields.
pub fn build_changes(request: UpdateTransactionRequest) -> Result<TransactionChanges, AppError> {
    let date = match supplied_text(request.date) {
        Some(raw) => Some(parse_date_field(&raw)?),
        None => None,
    };

    Ok(TransactionChanges {
        amount: supplied_amount(request.amount),
        description: supplied_text(request.description),
        category: supplied_text(request.category),
        date,
    })
}

/// Validate a create request into a [`NewTransaction`].
pub fn validate_new(request: CreateTransactionRequest) -> Result<NewTransaction, AppError> {
    let (Some(amount), Some(description), Some(category), Some(date)) = (
        supplied_amount(request.amount),
        supplied_text(request.description),
        supplied_text(request.category),
        supplied_text(request.date),
    ) else {
        return Err(AppError::Validation("All fields are required".to_string()));
    };

    Ok(NewTransaction {
        amount,
        description,
        category,
        date: parse_date_field(&date)?,
    })
}

/// Create a transaction.
///
/// # Errors
///
/// - `Validation`: a field is missing/falsy or the date cannot be parsed
/// - `Store`: the store failed
pub async fn create_transaction(
    store: &dyn TransactionStore,
    request: CreateTransactionRequest,
) -> Result<Transaction, AppError> {
    let new_transaction = validate_new(request)?;
    let created = store.create(new_transaction).await?;

    tracing::info!(id = created.id, category = %created.category, "Transaction created");
    Ok(created)
}

/// List transactions matching the query, one page at a time.
///
/// # Process
///
/// 1. Build the filter from the supplied parameters
/// 2. Resolve page/limit (falling back to defaults)
/// 3. Fetch the page, ordered by date descending
/// 4. Count all records matching the same filter
pub async fn list_transactions(
    store: &dyn TransactionStore,
    query: &ListTransactionsQuery,
    config: PaginationConfig,
) -> Result<TransactionPage, AppError> {
    let filter = build_filter(query)?;
    let page = PageRequest::resolve(query.page.as_deref(), query.limit.as_deref(), config);

    let data = store.find_many(&filter, page).await?;
    let total = store.count(&filter).await?;

    tracing::debug!(?filter, page = page.page, limit = page.limit, total, "Listed transactions");
    Ok(TransactionPage {
        data,
        total,
        page: page.page,
        limit: page.limit,
    })
}

/// Get a single transaction by id.
pub async fn get_transaction(
    store: &dyn TransactionStore,
    id: Option<&str>,
) -> Result<Transaction, AppError> {
    let id = parse_id(id)?;

    store.find_by_id(id).await?.ok_or(AppError::NotFound)
}

/// Apply a partial update.
///
/// # Errors
///
/// - `Validation`: missing id, or no field supplied
/// - `NotFound`: no transaction with this id
/// - `Store`: the store failed
pub async fn update_transaction(
    store: &dyn TransactionStore,
    id: Option<&str>,
    request: UpdateTransactionRequest,
) -> Result<Transaction, AppError> {
    let id = parse_id(id)?;
    let changes = build_changes(request)?;

    if changes.is_empty() {
        return Err(AppError::Validation(
            "At least one field is required to update".to_string(),
        ));
    }

    let updated = store.update(id, &changes).await?.ok_or(AppError::NotFound)?;

    tracing::info!(id, "Transaction updated");
    Ok(updated)
}

/// Permanently delete a transaction.
pub async fn delete_transaction(
    store: &dyn TransactionStore,
    id: Option<&str>,
) -> Result<(), AppError> {
    let id = parse_id(id)?;

    if !store.delete(id).await? {
        return Err(AppError::NotFound);
    }

    tracing::info!(id, "Transaction deleted");
    Ok(())
}
