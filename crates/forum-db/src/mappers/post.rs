//! Post entity <-> model mappers

use forum_core::entities::{Post, PostDetail};

use crate::models::PostWithAuthorModel;

/// Convert a joined post row into a detail with no relations attached yet.
///
/// Comments and votes are filled in by the repository after the batch
/// queries resolve; a post without any keeps the empty vectors.
impl From<PostWithAuthorModel> for PostDetail {
    fn from(model: PostWithAuthorModel) -> Self {
        PostDetail::new(
            Post {
                id: model.id,
                member_id: model.member_id,
                post_type: model.post_type,
                title: model.title,
                content: model.content,
                date_created: model.date_created,
            },
            model.author_username,
        )
    }
}
