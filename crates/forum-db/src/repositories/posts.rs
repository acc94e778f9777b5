//! PostgreSQL implementation of PostsRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{Comment, PostDetail, Vote};
use forum_core::traits::{PostsRepository, RepoResult};

use crate::models::{CommentModel, PostWithAuthorModel, VoteModel};

use super::error::map_store_error;

/// PostgreSQL implementation of PostsRepository
#[derive(Clone)]
pub struct PgPostsRepository {
    pool: PgPool,
}

impl PgPostsRepository {
    /// Create a new PgPostsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostsRepository for PgPostsRepository {
    #[instrument(skip(self))]
    async fn find_posts(&self, sort: &str) -> RepoResult<Vec<PostDetail>> {
        // The sort argument is recorded in the span but not applied;
        // posts always come back newest first.
        let posts = sqlx::query_as::<_, PostWithAuthorModel>(
            r"
            SELECT p.id, p.member_id, p.post_type, p.title, p.content, p.date_created,
                   u.username AS author_username
            FROM posts p
            JOIN members m ON m.id = p.member_id
            JOIN users u ON u.id = m.user_id
            ORDER BY p.date_created DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_store_error)?;

        let post_ids: Vec<i64> = posts.iter().map(|p| p.id).collect();

        let comments = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, post_id, member_id, text
            FROM comments
            WHERE post_id = ANY($1)
            ORDER BY id
            ",
        )
        .bind(&post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_store_error)?;

        let votes = sqlx::query_as::<_, VoteModel>(
            r"
            SELECT id, post_id, member_id, vote_type
            FROM votes
            WHERE post_id = ANY($1)
            ORDER BY id
            ",
        )
        .bind(&post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_store_error)?;

        let mut details: Vec<PostDetail> = posts.into_iter().map(PostDetail::from).collect();

        let index_by_post: HashMap<i64, usize> = details
            .iter()
            .enumerate()
            .map(|(i, detail)| (detail.post.id, i))
            .collect();

        for comment in comments {
            if let Some(&i) = index_by_post.get(&comment.post_id) {
                details[i].comments.push(Comment::from(comment));
            }
        }

        for vote in votes {
            if let Some(&i) = index_by_post.get(&vote.post_id) {
                details[i].votes.push(Vote::from(vote));
            }
        }

        Ok(details)
    }
}
