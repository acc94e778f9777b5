//! # forum-core
//!
//! Domain layer containing entities, errors, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{Comment, Member, NewUser, Post, PostDetail, User, Vote};
pub use error::DomainError;
pub use traits::{PostsRepository, RepoResult, UserRepository};
