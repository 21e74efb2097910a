//! Run with: cargo run --bin inspect_tasks

use anyhow::Context;
use bson::oid::ObjectId;
use tracing_subscriber::EnvFilter;

use taskly::config::{database, settings::Settings};
use taskly::modules::community_dept::crud::CommunityDeptCrud;
use taskly::modules::recurring_task::crud::RecurringTaskCrud;
use taskly::modules::team::crud::TeamCrud;

/// Dept under investigation; swap the literal to inspect another one.
const COMMUNITY_DEPT_ID: &str = "64f1f77bcf86cd7994390111";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::from_env()?;
    let dept_id = ObjectId::parse_str(COMMUNITY_DEPT_ID)
        .context("COMMUNITY_DEPT_ID is not a valid ObjectId")?;

    println!("Connecting to MongoDB...");
    let client = database::connect(&settings.mongodb_uri)
        .await
        .context("failed to connect to MongoDB")?;
    let db = client.database(&settings.database);

    let depts = CommunityDeptCrud::new(&db);
    let teams = TeamCrud::new(&db);
    let tasks = RecurringTaskCrud::new(&db);

    match depts.find_by_id(&dept_id).await? {
        Some(dept) => println!("Inspecting community dept `{}` ({})", dept.name, dept_id.to_hex()),
        None => println!(
            "Inspecting community dept {} (no matching dept document)",
            dept_id.to_hex()
        ),
    }

    let matching_teams = teams.find_by_community_dept(&dept_id).await?;
    println!("\nTeams referencing dept: {}", matching_teams.len());
    if !matching_teams.is_empty() {
        println!("{}", serde_json::to_string_pretty(&matching_teams)?);
    }

    let matching_tasks = tasks.find_by_community_dept(&dept_id).await?;
    println!("\nRecurring tasks referencing dept: {}", matching_tasks.len());
    if !matching_tasks.is_empty() {
        println!("{}", serde_json::to_string_pretty(&matching_tasks)?);
    }

    println!("\nTotal teams: {}", teams.count().await?);
    println!("Total recurring tasks: {}", tasks.count().await?);

    client.shutdown().await;
    println!("\n✓ Inspection complete");
    Ok(())
}
