//! Forum seed CLI entry point
//!
//! Run with:
//! ```bash
//! DATABASE_URL=postgresql://... cargo run -p forum-db --bin forum-seed
//! ```
//!
//! Applies pending migrations, then inserts the demo data set. Exits
//! with status 1 when any step fails.

use forum_common::try_init_tracing;
use forum_db::seed::{self, SeedSummary};
use forum_db::{create_pool_from_env, MIGRATOR};
use sqlx::PgPool;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    if let Err(e) = run().await {
        error!(error = %e, "Seeding failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    info!("Seeding database...");

    let pool = create_pool_from_env().await?;
    let outcome = migrate_and_seed(&pool).await;

    // Release the pool before reporting, even when seeding failed.
    pool.close().await;

    let summary = outcome?;
    info!(
        users = summary.users,
        members = summary.members,
        posts = summary.posts,
        comments = summary.comments,
        votes = summary.votes,
        "Seeding complete"
    );
    Ok(())
}

async fn migrate_and_seed(pool: &PgPool) -> Result<SeedSummary, Box<dyn std::error::Error>> {
    MIGRATOR.run(pool).await?;
    Ok(seed::run(pool).await?)
}
