//! Error handling utilities for repositories

use forum_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert a SQLx error into the opaque server error.
///
/// The original failure detail is dropped here and never travels past the
/// adapter boundary; callers see only `DomainError::ServerError`.
pub fn map_store_error(_e: SqlxError) -> DomainError {
    DomainError::ServerError
}
