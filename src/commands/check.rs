use crate::config::DatabaseConfig;
use crate::global::{configure_db, get_db, init_db};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Handle the check command: connect the process-wide database and report
#[allow(clippy::disallowed_methods)]
pub async fn handle_check(config: DatabaseConfig) -> Result<()> {
    let address = config.redacted_url();
    configure_db(config)?;

    println!("🔌 Connecting to {address}...");

    let client = init_db()
        .await
        .map_err(|e| anyhow::anyhow!("❌ Connection failed: {}", e))?;
    info!("Check connected to {}", address);

    // A second initialise must hand back the cached client
    let again = init_db().await?;
    let cached = get_db()?;
    anyhow::ensure!(
        Arc::ptr_eq(&client, &again) && Arc::ptr_eq(&client, &cached),
        "Database handle changed between calls"
    );

    let database = client
        .default_database()
        .map_or_else(|| "(none)".to_string(), |db| db.name().to_string());

    println!("✅ Connected");
    println!("   Database:    {database}");
    Ok(())
}
