//! Post entity - user-generated content items

use chrono::{DateTime, Utc};

use super::{Comment, Vote};

/// Post created by a member, tagged as "Text" or "Link"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub member_id: i64,
    pub post_type: String,
    pub title: String,
    pub content: String,
    pub date_created: DateTime<Utc>,
}

impl Post {
    pub fn new(
        id: i64,
        member_id: i64,
        post_type: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        date_created: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            member_id,
            post_type: post_type.into(),
            title: title.into(),
            content: content.into(),
            date_created,
        }
    }

    /// Check if this post links to external content
    #[inline]
    pub fn is_link(&self) -> bool {
        self.post_type == "Link"
    }

    /// Check if this post carries its own text body
    #[inline]
    pub fn is_text(&self) -> bool {
        self.post_type == "Text"
    }
}

/// Read aggregate: a post with its author's username and eagerly
/// loaded comments and votes.
///
/// Comments and votes are always present, empty vectors when the post
/// has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetail {
    pub post: Post,
    pub author_username: String,
    pub comments: Vec<Comment>,
    pub votes: Vec<Vote>,
}

impl PostDetail {
    /// Create a detail with no comments or votes attached yet
    pub fn new(post: Post, author_username: impl Into<String>) -> Self {
        Self {
            post,
            author_username: author_username.into(),
            comments: Vec::new(),
            votes: Vec::new(),
        }
    }

    /// Total number of votes on this post
    pub fn points(&self) -> usize {
        self.votes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(post_type: &str) -> Post {
        Post::new(1, 1, post_type, "Hello", "World", Utc::now())
    }

    #[test]
    fn test_post_type_predicates() {
        assert!(sample_post("Text").is_text());
        assert!(!sample_post("Text").is_link());
        assert!(sample_post("Link").is_link());
        assert!(!sample_post("other").is_text());
    }

    #[test]
    fn test_detail_starts_empty() {
        let detail = PostDetail::new(sample_post("Text"), "johndoe");
        assert_eq!(detail.author_username, "johndoe");
        assert!(detail.comments.is_empty());
        assert!(detail.votes.is_empty());
        assert_eq!(detail.points(), 0);
    }
}
