//! Comment entity <-> model mapper

use forum_core::entities::Comment;

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            post_id: model.post_id,
            member_id: model.member_id,
            text: model.text,
        }
    }
}
