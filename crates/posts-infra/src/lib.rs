//! # Posts Infrastructure
//!
//! Concrete implementations of the store port defined in `posts-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL store via SeaORM
//! - `minimal` - No external dependencies, in-memory store only

pub mod database;

pub use database::{DatabaseConfig, DatabaseConnections, InMemoryPostRepository};

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
