//! Repository traits (ports)

pub mod repositories;

pub use repositories::{PostsRepository, RepoResult, UserRepository};
