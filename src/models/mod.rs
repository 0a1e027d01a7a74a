//! Data models representing database entities and API bodies.

/// List filter and its clauses
pub mod filter;
/// Page resolution and the list response body
pub mod pagination;
/// Transaction entity and request types
pub mod transaction;
