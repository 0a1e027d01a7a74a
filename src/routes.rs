//! Router construction.

use axum::{
    Router,
    routing::{get, put},
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{
    error::{AppError, handle_panic},
    handlers,
    state::AppState,
};

/// The API endpoints URIs.
pub mod endpoints {
    pub const HEALTH: &str = "/health";
    pub const TRANSACTIONS: &str = "/api/transactions";
    /// Relative to [`TRANSACTIONS`].
    pub const TRANSACTION: &str = "/{id}";
}

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let transaction_routes = Router::new()
        .route(
            "/",
            get(handlers::transactions::list_transactions)
                .post(handlers::transactions::create_transaction)
                .put(handlers::transactions::update_without_id)
                .delete(handlers::transactions::delete_without_id),
        )
        .route(
            endpoints::TRANSACTION,
            put(handlers::transactions::update_transaction)
                .get(handlers::transactions::get_transaction)
                .delete(handlers::transactions::delete_transaction),
        );

    Router::new()
        .route(endpoints::HEALTH, get(handlers::health::health_check))
        .nest(endpoints::TRANSACTIONS, transaction_routes)
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}

async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}
