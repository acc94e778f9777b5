//! Sort extractor
//!
//! Extracts the sort selection from the query string.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Sort applied when the query string does not name one
pub const DEFAULT_SORT: &str = "recent";

/// Raw sort query parameters
#[derive(Debug, Deserialize)]
pub struct SortParams {
    #[serde(default)]
    pub sort: Option<String>,
}

/// Sort selection taken from the query string
///
/// Every value is accepted and handed down unchanged; the read path
/// orders posts newest first regardless of what the client asks for.
#[derive(Debug, Clone)]
pub struct SortQuery {
    pub sort: String,
}

impl Default for SortQuery {
    fn default() -> Self {
        Self {
            sort: DEFAULT_SORT.to_string(),
        }
    }
}

impl From<SortParams> for SortQuery {
    fn from(params: SortParams) -> Self {
        Self {
            sort: params.sort.unwrap_or_else(|| DEFAULT_SORT.to_string()),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SortQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<SortParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(SortQuery::from(params))
    }
}
