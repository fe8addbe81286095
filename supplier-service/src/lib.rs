//! Supplier management service
//!
//! CRUD and date-ranged reporting over the supplier table, exposed as a
//! small REST API behind the supply-chain gateway.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
