//! # forum-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{ApiResponse, PostResponse};
pub use services::{
    PostService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
