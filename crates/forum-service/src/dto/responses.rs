//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Field names are
//! camelCase on the wire, matching what the web client expects.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use forum_core::entities::{Comment, PostDetail, Vote};

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Post Responses
// ============================================================================

/// Post as served to clients, with its author block and eagerly loaded
/// comments and votes embedded
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub member_id: i64,
    pub member_posted_by: MemberPostedBy,
    pub post_type: String,
    pub title: String,
    pub content: String,
    pub date_created: String,
    pub comments: Vec<CommentResponse>,
    pub votes: Vec<VoteResponse>,
}

/// Author block nested under each post
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPostedBy {
    pub user: PostAuthor,
}

/// Author fields exposed on the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    pub username: String,
}

/// Comment embedded in a post response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub post_id: i64,
    pub member_id: i64,
    pub text: String,
}

/// Vote embedded in a post response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub id: i64,
    pub post_id: i64,
    pub member_id: i64,
    pub vote_type: String,
}

/// Render a timestamp for the wire: RFC 3339 in UTC with microsecond
/// precision and a trailing "Z".
fn format_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl From<PostDetail> for PostResponse {
    fn from(detail: PostDetail) -> Self {
        Self {
            id: detail.post.id,
            member_id: detail.post.member_id,
            member_posted_by: MemberPostedBy {
                user: PostAuthor {
                    username: detail.author_username,
                },
            },
            post_type: detail.post.post_type,
            title: detail.post.title,
            content: detail.post.content,
            date_created: format_date(detail.post.date_created),
            comments: detail
                .comments
                .into_iter()
                .map(CommentResponse::from)
                .collect(),
            votes: detail.votes.into_iter().map(VoteResponse::from).collect(),
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            member_id: comment.member_id,
            text: comment.text,
        }
    }
}

impl From<Vote> for VoteResponse {
    fn from(vote: Vote) -> Self {
        Self {
            id: vote.id,
            post_id: vote.post_id,
            member_id: vote.member_id,
            vote_type: vote.vote_type,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use forum_core::entities::Post;

    fn sample_detail() -> PostDetail {
        let date = Utc.timestamp_opt(1_700_000_000, 123_456_000).unwrap();
        let post = Post::new(7, 3, "Text", "Hello", "World", date);
        let mut detail = PostDetail::new(post, "johndoe");
        detail.comments.push(Comment::new(1, 7, 4, "Nice post"));
        detail.votes.push(Vote::new(1, 7, 4, "Upvote"));
        detail
    }

    #[test]
    fn test_post_response_uses_camel_case_keys() {
        let response = PostResponse::from(sample_detail());
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["memberId"], 3);
        assert_eq!(value["postType"], "Text");
        assert_eq!(value["memberPostedBy"]["user"]["username"], "johndoe");
        assert_eq!(value["comments"][0]["postId"], 7);
        assert_eq!(value["votes"][0]["voteType"], "Upvote");
        assert!(value["dateCreated"].is_string());
    }

    #[test]
    fn test_empty_relations_serialize_as_empty_arrays() {
        let date = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let detail = PostDetail::new(Post::new(1, 1, "Text", "Quiet", "post", date), "johndoe");
        let value = serde_json::to_value(PostResponse::from(detail)).unwrap();

        assert_eq!(value["comments"], serde_json::json!([]));
        assert_eq!(value["votes"], serde_json::json!([]));
    }

    #[test]
    fn test_date_created_round_trips_exactly() {
        let date = Utc.timestamp_opt(1_700_000_000, 123_456_000).unwrap();
        let response = PostResponse::from(sample_detail());

        assert!(response.date_created.ends_with('Z'));
        let parsed = DateTime::parse_from_rfc3339(&response.date_created).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), date);
    }

    #[test]
    fn test_api_response_wraps_data() {
        let response = ApiResponse::new(vec![1, 2, 3]);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true);
        assert_eq!(ready.status, "ready");
        assert_eq!(ready.checks.database, "healthy");

        let not_ready = ReadinessResponse::ready(false);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.database, "unhealthy");
    }
}
