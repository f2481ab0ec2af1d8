//! # Posts Shared
//!
//! Wire types for the posts API, shared by the server and any Rust client.

pub mod dto;

pub use dto::{HealthResponse, PostPayload, PostResponse};
