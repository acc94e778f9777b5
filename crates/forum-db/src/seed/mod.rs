//! Demo data seeding
//!
//! Inserts the fixed starter data set: two users with their member
//! records, two posts, two comments, and two votes. Inserts run
//! sequentially without a wrapping transaction, so a rerun against an
//! already seeded database stops at the first unique violation and
//! leaves the earlier rows in place.

use sqlx::PgPool;
use tracing::info;

/// Row counts per table observed after a seed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: i64,
    pub members: i64,
    pub posts: i64,
    pub comments: i64,
    pub votes: i64,
}

/// Insert the demo data set and report the resulting table counts
pub async fn run(pool: &PgPool) -> Result<SeedSummary, sqlx::Error> {
    let user1_id = insert_user(
        pool,
        "john.doe@example.com",
        "johndoe",
        "John",
        "Doe",
        "hashedpassword123",
    )
    .await?;
    let user2_id = insert_user(
        pool,
        "jane.smith@example.com",
        "janesmith",
        "Jane",
        "Smith",
        "hashedpassword456",
    )
    .await?;

    let member1_id = insert_member(pool, user1_id).await?;
    let member2_id = insert_member(pool, user2_id).await?;

    let post1_id = insert_post(
        pool,
        member1_id,
        "Text",
        "Welcome to the Forum!",
        "This is the first post in our brand new forum. Introduce yourself and join the discussion!",
    )
    .await?;
    let post2_id = insert_post(
        pool,
        member2_id,
        "Link",
        "Great Resource on Domain Driven Design",
        "https://martinfowler.com/bliki/DomainDrivenDesign.html",
    )
    .await?;

    insert_comment(
        pool,
        post1_id,
        member2_id,
        "Great introduction post! Looking forward to more content.",
    )
    .await?;
    insert_comment(
        pool,
        post2_id,
        member1_id,
        "Thanks for sharing this excellent resource!",
    )
    .await?;

    insert_vote(pool, post1_id, member2_id, "Upvote").await?;
    insert_vote(pool, post2_id, member1_id, "Upvote").await?;

    summarize(pool).await
}

async fn insert_user(
    pool: &PgPool,
    email: &str,
    username: &str,
    first_name: &str,
    last_name: &str,
    password: &str,
) -> Result<i64, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (email, username, first_name, last_name, password)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(email)
    .bind(username)
    .bind(first_name)
    .bind(last_name)
    .bind(password)
    .fetch_one(pool)
    .await?;

    info!(user_id = id, username, "Created user");
    Ok(id)
}

async fn insert_member(pool: &PgPool, user_id: i64) -> Result<i64, sqlx::Error> {
    let id: i64 = sqlx::query_scalar("INSERT INTO members (user_id) VALUES ($1) RETURNING id")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    info!(member_id = id, user_id, "Created member");
    Ok(id)
}

async fn insert_post(
    pool: &PgPool,
    member_id: i64,
    post_type: &str,
    title: &str,
    content: &str,
) -> Result<i64, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO posts (member_id, post_type, title, content)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(member_id)
    .bind(post_type)
    .bind(title)
    .bind(content)
    .fetch_one(pool)
    .await?;

    info!(post_id = id, post_type, title, "Created post");
    Ok(id)
}

async fn insert_comment(
    pool: &PgPool,
    post_id: i64,
    member_id: i64,
    text: &str,
) -> Result<i64, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO comments (post_id, member_id, text)
         VALUES ($1, $2, $3)
         RETURNING id",
    )
    .bind(post_id)
    .bind(member_id)
    .bind(text)
    .fetch_one(pool)
    .await?;

    info!(comment_id = id, post_id, "Created comment");
    Ok(id)
}

async fn insert_vote(
    pool: &PgPool,
    post_id: i64,
    member_id: i64,
    vote_type: &str,
) -> Result<i64, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO votes (post_id, member_id, vote_type)
         VALUES ($1, $2, $3)
         RETURNING id",
    )
    .bind(post_id)
    .bind(member_id)
    .bind(vote_type)
    .fetch_one(pool)
    .await?;

    info!(vote_id = id, post_id, vote_type, "Created vote");
    Ok(id)
}

async fn summarize(pool: &PgPool) -> Result<SeedSummary, sqlx::Error> {
    Ok(SeedSummary {
        users: count(pool, "SELECT COUNT(*) FROM users").await?,
        members: count(pool, "SELECT COUNT(*) FROM members").await?,
        posts: count(pool, "SELECT COUNT(*) FROM posts").await?,
        comments: count(pool, "SELECT COUNT(*) FROM comments").await?,
        votes: count(pool, "SELECT COUNT(*) FROM votes").await?,
    })
}

async fn count(pool: &PgPool, query: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(query).fetch_one(pool).await
}
