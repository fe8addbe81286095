//! Supply-chain API gateway
//!
//! Authenticates users, issues JWT bearer tokens, and forwards authorized
//! requests to the downstream order, product, and supplier services with
//! per-route role enforcement.

pub mod auth;
pub mod config;
pub mod error;
pub mod proxy;
pub mod routes;
pub mod state;
pub mod users;
