//! Test fixtures and data generators
//!
//! Inserts forum rows directly through the database pool. The API only
//! exposes read endpoints, so tests arrange their data at this level.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use chrono::{DateTime, Utc};
use forum_db::PgPool;
use serde::Deserialize;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a suffix unique across test processes and runs
pub fn unique_suffix() -> String {
    format!(
        "{}_{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    )
}

/// A user enrolled as a forum member
#[derive(Debug)]
pub struct TestMember {
    pub user_id: i64,
    pub member_id: i64,
    pub username: String,
}

/// Insert a user and enroll them as a member
pub async fn create_member(pool: &PgPool) -> Result<TestMember> {
    let suffix = unique_suffix();
    let email = format!("api_{suffix}@example.com");
    let username = format!("api_user_{suffix}");

    let user_id: i64 = sqlx::query_scalar(
        "INSERT INTO users (email, username, first_name, last_name, password)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(&email)
    .bind(&username)
    .bind("Api")
    .bind("Tester")
    .bind("hashed_password")
    .fetch_one(pool)
    .await?;

    let member_id: i64 =
        sqlx::query_scalar("INSERT INTO members (user_id) VALUES ($1) RETURNING id")
            .bind(user_id)
            .fetch_one(pool)
            .await?;

    Ok(TestMember {
        user_id,
        member_id,
        username,
    })
}

/// Insert a text post with an explicit creation time and return its id
pub async fn create_post(
    pool: &PgPool,
    member_id: i64,
    title: &str,
    date_created: DateTime<Utc>,
) -> Result<i64> {
    let id = sqlx::query_scalar(
        "INSERT INTO posts (member_id, post_type, title, content, date_created)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(member_id)
    .bind("Text")
    .bind(title)
    .bind("test content")
    .bind(date_created)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Insert a comment and return its id
pub async fn create_comment(
    pool: &PgPool,
    post_id: i64,
    member_id: i64,
    text: &str,
) -> Result<i64> {
    let id = sqlx::query_scalar(
        "INSERT INTO comments (post_id, member_id, text) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(post_id)
    .bind(member_id)
    .bind(text)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Insert a vote and return its id
pub async fn create_vote(
    pool: &PgPool,
    post_id: i64,
    member_id: i64,
    vote_type: &str,
) -> Result<i64> {
    let id = sqlx::query_scalar(
        "INSERT INTO votes (post_id, member_id, vote_type) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(post_id)
    .bind(member_id)
    .bind(vote_type)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Remove a user; members, posts, comments, and votes cascade
pub async fn delete_user(pool: &PgPool, user_id: i64) -> Result<()> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
