//! Domain entities

pub mod comment;
pub mod member;
pub mod post;
pub mod user;
pub mod vote;

pub use comment::Comment;
pub use member::Member;
pub use post::{Post, PostDetail};
pub use user::{NewUser, User};
pub use vote::Vote;
