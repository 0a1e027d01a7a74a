//! Transaction Ledger API.
//!
//! A REST API for recording personal financial transactions: create, list
//! (with filtering and pagination), update and delete. The binary in
//! `main.rs` wires these modules to PostgreSQL and serves them with axum.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
