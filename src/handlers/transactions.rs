//! Transaction HTTP handlers.
//!
//! This module implements the transaction endpoints, mounted under
//! `/api/transactions`:
//! - POST / - Create a transaction
//! - GET / - List transactions (filtering + pagination)
//! - GET /:id - Get one transaction
//! - PUT /:id - Partially update a transaction
//! - DELETE /:id - Delete a transaction
//!
//! `PUT /` and `DELETE /` exist only to report the missing id as a 400.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::{
        pagination::{ListTransactionsQuery, TransactionPage},
        transaction::{CreateTransactionRequest, Transaction, UpdateTransactionRequest},
    },
    services::transaction_service,
    state::AppState,
};

/// Create a transaction.
///
/// # Request Body
///
/// ```json
/// {
///   "amount": 12.5,
///   "description": "Lunch",
///   "category": "food",
///   "date": "2025-03-01"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the created transaction
/// - **Error (400)**: a field is missing, the date is invalid or the body is not JSON
pub async fn create_transaction(
    State(state): State<AppState>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    let transaction =
        transaction_service::create_transaction(state.store.as_ref(), request).await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// List transactions.
///
/// # Query Parameters
///
/// - `page` (default 1), `limit` (default 10)
/// - `category`: exact match
/// - `minAmount` / `maxAmount`: inclusive bounds
///
/// A query string that cannot be deserialized (e.g. a repeated key) is a 400.
///
/// # Response (200 OK)
///
/// ```json
/// { "data": [ ... ], "total": 27, "page": 1, "limit": 10 }
/// ```
pub async fn list_transactions(
    State(state): State<AppState>,
    query: Result<Query<ListTransactionsQuery>, QueryRejection>,
) -> Result<Json<TransactionPage>, AppError> {
    let Query(query) = query?;
    let page =
        transaction_service::list_transactions(state.store.as_ref(), &query, state.pagination)
            .await?;

    Ok(Json(page))
}

/// Get a transaction by id.
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, AppError> {
    let transaction =
        transaction_service::get_transaction(state.store.as_ref(), Some(id.as_str())).await?;

    Ok(Json(transaction))
}

/// Partially update a transaction.
///
/// # Response
///
/// - **Success (200 OK)**: the updated transaction
/// - **Error (400)**: no field supplied
/// - **Error (404)**: unknown id
pub async fn update_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTransactionRequest>, JsonRejection>,
) -> Result<Json<Transaction>, AppError> {
    let Json(request) = payload?;
    let transaction =
        transaction_service::update_transaction(state.store.as_ref(), Some(id.as_str()), request)
            .await?;

    Ok(Json(transaction))
}

/// `PUT` without an id.
pub async fn update_without_id(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    transaction_service::update_transaction(
        state.store.as_ref(),
        None,
        UpdateTransactionRequest::default(),
    )
    .await?;

    Ok(StatusCode::OK)
}

/// Delete a transaction.
///
/// # Response
///
/// Returns 204 No Content on success, 404 if the id is unknown.
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    transaction_service::delete_transaction(state.store.as_ref(), Some(id.as_str())).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE` without an id.
pub async fn delete_without_id(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    transaction_service::delete_transaction(state.store.as_ref(), None).await?;

    Ok(StatusCode::NO_CONTENT)
}
