//! Run with: cargo run --bin drop_dept_indexes

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use taskly::config::{database, settings::Settings};
use taskly::modules::community_dept::crud::{CommunityDeptCrud, IndexError};

// Leftovers from before dept lookups moved to the compound index.
const TARGET_INDEXES: [&str; 2] = ["CreatedBy_1", "name_1"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::from_env()?;

    println!("Connecting to MongoDB...");
    let client = database::connect(&settings.mongodb_uri)
        .await
        .context("failed to connect to MongoDB")?;
    let db = client.database(&settings.database);

    let depts = CommunityDeptCrud::new(&db);

    for name in TARGET_INDEXES {
        println!("Dropping index `{}` on `communitydepts`...", name);
        match depts.drop_index(name).await {
            Ok(()) => println!("✓ Dropped `{}`", name),
            Err(IndexError::NotFound(_)) => {
                println!("✓ `{}` already absent, nothing to drop", name)
            }
            Err(err) => return Err(err.into()),
        }
    }

    let indexes = depts.list_indexes().await?;
    println!("\nRemaining indexes on `communitydepts`:");
    println!("{}", serde_json::to_string_pretty(&indexes)?);

    client.shutdown().await;
    println!("\n✓ Index maintenance complete");
    Ok(())
}
