//! # forum-client
//!
//! HTTP client for the forum API and the front page built on it.

pub mod api;
pub mod pages;

// Re-export commonly used types at crate root
pub use api::{GetPostsResponse, Post, PostsApi};
pub use pages::MainPage;
