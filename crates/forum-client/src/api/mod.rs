//! API client
//!
//! Typed access to the forum API endpoints.

pub mod posts;

pub use posts::{
    Comment, ErrorDetail, GetPostsResponse, MemberPostedBy, Post, PostAuthor, PostsApi, Vote,
};
