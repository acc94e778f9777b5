//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{NewUser, PostDetail, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Posts Repository
// ============================================================================

#[async_trait]
pub trait PostsRepository: Send + Sync {
    /// List all posts with author username, comments, and votes attached.
    ///
    /// The sort criterion is accepted but not applied: results are always
    /// ordered by creation date, newest first. Posts without comments or
    /// votes come back with empty vectors, never missing data.
    async fn find_posts(&self, sort: &str) -> RepoResult<Vec<PostDetail>>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return it with the store-assigned id
    async fn save(&self, user: NewUser) -> RepoResult<User>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;
}
