//! Comment entity - member replies attached to a post

/// Comment left by a member on a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub member_id: i64,
    pub text: String,
}

impl Comment {
    pub fn new(id: i64, post_id: i64, member_id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            post_id,
            member_id,
            text: text.into(),
        }
    }
}
