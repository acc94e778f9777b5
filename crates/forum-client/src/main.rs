//! Forum front page entry point
//!
//! Fetches the post listing from the API and prints the rendered page:
//! ```bash
//! API_URL=http://localhost:8080 cargo run -p forum-client
//! ```

use forum_client::{MainPage, PostsApi};
use forum_common::try_init_tracing;

/// API base URL used when API_URL is not set
const DEFAULT_API_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    let _ = dotenvy::dotenv();

    let api_url = std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

    let mut page = MainPage::new(PostsApi::new(api_url));
    page.load_posts().await;

    print!("{}", page.render());
}
