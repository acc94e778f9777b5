//! Main page
//!
//! Loads the post listing once and renders it. Failures of any kind leave
//! the page with an empty listing; nothing is surfaced to the reader.

use tracing::{error, info};

use crate::api::{Post, PostsApi};

/// Front page holding the fetched post listing
#[derive(Debug)]
pub struct MainPage {
    api: PostsApi,
    posts: Vec<Post>,
}

impl MainPage {
    /// Create the page against the given API client
    pub fn new(api: PostsApi) -> Self {
        Self {
            api,
            posts: Vec::new(),
        }
    }

    /// Posts currently held by the page
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Fetch the listing once.
    ///
    /// A server error envelope and a transport failure both leave the
    /// listing empty; they are logged and otherwise swallowed.
    pub async fn load_posts(&mut self) {
        match self.api.get_posts("recent").await {
            Ok(response) => {
                if let Some(err) = &response.error {
                    error!(code = %err.code, message = %err.message, "Server returned an error envelope");
                }
                self.posts = response.data.unwrap_or_default();
                info!(count = self.posts.len(), "Posts loaded");
            }
            Err(e) => {
                error!(error = %e, "Failed to load posts");
                self.posts = Vec::new();
            }
        }
    }

    /// Render the page as plain text
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("== Forum ==\n");
        out.push_str("[ Popular | New ]\n\n");

        if self.posts.is_empty() {
            out.push_str("No posts yet.\n");
            return out;
        }

        for post in &self.posts {
            out.push_str(&format!(
                "{} | {} points | by {} | {} comments\n",
                post.title,
                post.votes.len(),
                post.member_posted_by.user.username,
                post.comments.len(),
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Comment, MemberPostedBy, PostAuthor, Vote};

    fn sample_post(title: &str, username: &str) -> Post {
        Post {
            id: 1,
            member_id: 2,
            member_posted_by: MemberPostedBy {
                user: PostAuthor {
                    username: username.to_string(),
                },
            },
            post_type: "Text".to_string(),
            title: title.to_string(),
            content: "body".to_string(),
            date_created: "2024-01-15T10:30:00.000000Z".to_string(),
            comments: vec![Comment {
                id: 1,
                post_id: 1,
                member_id: 3,
                text: "Nice".to_string(),
            }],
            votes: vec![Vote {
                id: 1,
                post_id: 1,
                member_id: 3,
                vote_type: "Upvote".to_string(),
            }],
        }
    }

    #[test]
    fn test_render_empty_page() {
        let page = MainPage::new(PostsApi::new("http://localhost:8080"));
        let rendered = page.render();

        assert!(rendered.contains("== Forum =="));
        assert!(rendered.contains("No posts yet."));
    }

    #[test]
    fn test_render_lists_posts_in_order() {
        let mut page = MainPage::new(PostsApi::new("http://localhost:8080"));
        page.posts = vec![
            sample_post("Newest post", "janesmith"),
            sample_post("Older post", "johndoe"),
        ];

        let rendered = page.render();
        assert!(rendered.contains("Newest post | 1 points | by janesmith | 1 comments"));

        let newest = rendered.find("Newest post").unwrap();
        let older = rendered.find("Older post").unwrap();
        assert!(newest < older);
    }
}
