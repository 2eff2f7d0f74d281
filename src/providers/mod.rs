//! Search provider implementations.
//!
//! Each module provides a struct implementing [`crate::provider::SearchProvider`]
//! that turns a query into structured results.

pub mod google;

pub use google::GoogleProvider;
