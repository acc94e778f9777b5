//! Business logic services
//!
//! Service layer implementations that orchestrate repository access and
//! shape the results for the API layer.

pub mod context;
pub mod error;
pub mod post;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
