//! Business logic services.
//!
//! Services contain core logic separated from HTTP handlers.
//! They validate input and talk to the store.

pub mod transaction_service;
