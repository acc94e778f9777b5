//! Request extractors
//!
//! Custom Axum extractors for query parameters.

pub mod sort;

pub use sort::{SortQuery, DEFAULT_SORT};
