//! Database models (SQLx `FromRow` structs)

pub mod comment;
pub mod post;
pub mod user;
pub mod vote;

pub use comment::CommentModel;
pub use post::PostWithAuthorModel;
pub use user::UserModel;
pub use vote::VoteModel;
