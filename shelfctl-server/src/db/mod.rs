//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Connection pool - no Arc<Mutex<Connection>>
//! - Every statement uses driver-level placeholders - no string-built SQL
//! - Single-statement operations - no multi-step transactions

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
