//! Posts API client
//!
//! Fetches the post listing. Server error envelopes are decoded and handed
//! to the caller rather than being turned into transport failures.

use reqwest::Client;
use serde::Deserialize;

/// Post as it appears on the wire
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub member_id: i64,
    pub member_posted_by: MemberPostedBy,
    pub post_type: String,
    pub title: String,
    pub content: String,
    pub date_created: String,
    pub comments: Vec<Comment>,
    pub votes: Vec<Vote>,
}

/// Author block nested under each post
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPostedBy {
    pub user: PostAuthor,
}

/// Author fields exposed on the wire
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    pub username: String,
}

/// Comment embedded in a post
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub member_id: i64,
    pub text: String,
}

/// Vote embedded in a post
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub id: i64,
    pub post_id: i64,
    pub member_id: i64,
    pub vote_type: String,
}

/// Error detail forwarded from the server envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Response envelope for the posts listing
///
/// The server populates exactly one of `data` and `error`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetPostsResponse {
    #[serde(default)]
    pub data: Option<Vec<Post>>,
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

/// Client for the posts endpoints
#[derive(Debug, Clone)]
pub struct PostsApi {
    http: Client,
    api_url: String,
}

impl PostsApi {
    /// Create a client against the given API base URL
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
        }
    }

    /// Fetch the post listing.
    ///
    /// The body is decoded whatever the HTTP status, so a server error
    /// envelope comes back as `Ok` with `error` populated. Only transport
    /// and decode failures surface as `Err`.
    pub async fn get_posts(&self, sort: &str) -> Result<GetPostsResponse, reqwest::Error> {
        let response = self
            .http
            .get(format!("{}/posts", self.api_url))
            .query(&[("sort", sort)])
            .send()
            .await?;

        response.json().await
    }
}
