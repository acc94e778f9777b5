//! Vote entity - a member's vote on a post

/// Vote cast by a member on a post, tagged with a free-form type
/// such as "Upvote"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id: i64,
    pub post_id: i64,
    pub member_id: i64,
    pub vote_type: String,
}

impl Vote {
    pub fn new(id: i64, post_id: i64, member_id: i64, vote_type: impl Into<String>) -> Self {
        Self {
            id,
            post_id,
            member_id,
            vote_type: vote_type.into(),
        }
    }

    /// Check if this vote counts in favour of the post
    #[inline]
    pub fn is_upvote(&self) -> bool {
        self.vote_type == "Upvote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_upvote() {
        assert!(Vote::new(1, 1, 1, "Upvote").is_upvote());
        assert!(!Vote::new(1, 1, 1, "Downvote").is_upvote());
    }
}
