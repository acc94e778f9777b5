//! Vote entity <-> model mapper

use forum_core::entities::Vote;

use crate::models::VoteModel;

/// Convert VoteModel to Vote entity
impl From<VoteModel> for Vote {
    fn from(model: VoteModel) -> Self {
        Vote {
            id: model.id,
            post_id: model.post_id,
            member_id: model.member_id,
            vote_type: model.vote_type,
        }
    }
}
