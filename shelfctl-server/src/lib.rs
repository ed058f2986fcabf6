//! shelfctl-server: HTTP API over the product inventory store
//!
//! Exposes product CRUD over HTTP: a thin layer of axum routing and
//! parameterized sqlx queries against a PostgreSQL `products` table.

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, ServerConfig};
