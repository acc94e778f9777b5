//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// Repositories surface every store-level failure as `ServerError`.
/// The variant carries no detail: the underlying cause is dropped at
/// the adapter boundary and never reaches API consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Server error")]
    ServerError,
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ServerError => "SERVER_ERROR",
        }
    }

    /// Check if this error maps to a 5xx response
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ServerError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(DomainError::ServerError.code(), "SERVER_ERROR");
    }

    #[test]
    fn test_error_display_carries_no_detail() {
        assert_eq!(DomainError::ServerError.to_string(), "Server error");
    }

    #[test]
    fn test_is_server_error() {
        assert!(DomainError::ServerError.is_server_error());
    }
}
