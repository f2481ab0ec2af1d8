//! # Posts Core
//!
//! The domain layer of the posts API.
//! This crate holds the post model, its validation and merge rules, the store
//! port and the service that drives it. It has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError};
pub use service::PostService;
