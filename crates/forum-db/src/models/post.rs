//! Post database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Post row joined with the posting member's username.
///
/// Produced by the read query that walks posts -> members -> users.
#[derive(Debug, Clone, FromRow)]
pub struct PostWithAuthorModel {
    pub id: i64,
    pub member_id: i64,
    pub post_type: String,
    pub title: String,
    pub content: String,
    pub date_created: DateTime<Utc>,
    pub author_username: String,
}
