//! Post handlers
//!
//! Endpoints for the post read path.

use axum::extract::State;
use forum_service::{ApiResponse, PostResponse, PostService};

use crate::extractors::SortQuery;
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// List posts for the front page
///
/// GET /posts?sort=recent
pub async fn get_posts(
    State(state): State<AppState>,
    sort: SortQuery,
) -> ApiResult<ApiJson<ApiResponse<Vec<PostResponse>>>> {
    let service = PostService::new(state.service_context());
    let posts = service.find_posts(&sort.sort).await?;
    Ok(ApiJson(ApiResponse::new(posts)))
}
