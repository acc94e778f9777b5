//! Integration test utilities for the forum server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API and the read client.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
