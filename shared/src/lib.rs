//! Shared types and models for the Hawaii Climate API
//!
//! This crate contains the record shapes of the historical weather dataset
//! and the response types served by the backend. It performs no I/O.

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
