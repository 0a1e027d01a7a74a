//! HTTP request handlers (route handlers).
//!
//! Each handler extracts request data, calls into the service layer and
//! shapes the HTTP response (status code, JSON body).

/// Service health endpoint
pub mod health;
/// Transaction CRUD endpoints
pub mod transactions;
