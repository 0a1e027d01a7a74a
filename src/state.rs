//! Shared state handed to every request handler.

use std::sync::Arc;

use crate::{
    models::pagination::PaginationConfig,
    store::{SharedStore, TransactionStore},
};

/// The state of the REST server.
#[derive(Clone)]
pub struct AppState {
    /// The store for managing [transactions](crate::models::transaction::Transaction).
    pub store: SharedStore,
    /// Defaults and bounds for list pagination.
    pub pagination: PaginationConfig,
}

impl AppState {
    pub fn new<S>(store: S, pagination: PaginationConfig) -> Self
    where
        S: TransactionStore + 'static,
    {
        Self {
            store: Arc::new(store),
            pagination,
        }
    }
}
