//! Data Transfer Objects
//!
//! Response DTOs shaping service output into the JSON the web client
//! expects.

pub mod responses;

// Re-export commonly used response types
pub use responses::{
    ApiResponse, CommentResponse, HealthChecks, HealthResponse, MemberPostedBy, PostAuthor,
    PostResponse, ReadinessResponse, VoteResponse,
};
