//! In-memory repository implementations
//!
//! Store-free counterparts of the PostgreSQL adapters with the same
//! observable contract: newest-first ordering, empty relation vectors,
//! and the opaque server error on failure. Used by tests and by setups
//! that need a working read path without a database.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use forum_core::entities::{NewUser, PostDetail, User};
use forum_core::error::DomainError;
use forum_core::traits::{PostsRepository, RepoResult, UserRepository};

/// In-memory implementation of PostsRepository
#[derive(Default)]
pub struct InMemoryPostsRepository {
    posts: RwLock<Vec<PostDetail>>,
    failing: AtomicBool,
}

impl InMemoryPostsRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a post detail to the store
    pub fn insert(&self, detail: PostDetail) {
        let mut posts = self.posts.write().unwrap_or_else(PoisonError::into_inner);
        posts.push(detail);
    }

    /// Make every subsequent operation fail with the opaque server error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl PostsRepository for InMemoryPostsRepository {
    async fn find_posts(&self, _sort: &str) -> RepoResult<Vec<PostDetail>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::ServerError);
        }

        let posts = self.posts.read().unwrap_or_else(PoisonError::into_inner);
        let mut result = posts.clone();
        result.sort_by(|a, b| b.post.date_created.cmp(&a.post.date_created));
        Ok(result)
    }
}

/// In-memory implementation of UserRepository
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
    next_id: AtomicI64,
    failing: AtomicBool,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
            failing: AtomicBool::new(false),
        }
    }

    /// Make every subsequent operation fail with the opaque server error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> RepoResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::ServerError);
        }
        Ok(())
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: NewUser) -> RepoResult<User> {
        self.check_available()?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = user.into_user(id);

        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.check_available()?;

        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        self.check_available()?;

        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        Ok(users.iter().find(|u| u.username == username).cloned())
    }
}
