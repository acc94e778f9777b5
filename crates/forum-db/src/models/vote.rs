//! Vote database model

use sqlx::FromRow;

/// Database model for the votes table
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub id: i64,
    pub post_id: i64,
    pub member_id: i64,
    pub vote_type: String,
}
