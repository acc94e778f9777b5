//! Repository implementations

pub mod error;
pub mod memory;
pub mod posts;
pub mod user;

pub use memory::{InMemoryPostsRepository, InMemoryUserRepository};
pub use posts::PgPostsRepository;
pub use user::PgUserRepository;
