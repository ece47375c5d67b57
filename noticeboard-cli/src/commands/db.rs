//! Database maintenance commands

use anyhow::{Context, Result};
use clap::Parser;

use noticeboard_server::db::{self, schema};

use super::DbArgs;

#[derive(Parser, Debug)]
pub struct CheckDbArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

/// Build the pool (which pings once) and close it again
pub async fn run_check_db(args: CheckDbArgs) -> Result<()> {
    let config = args.db.database_config()?;
    let pool = db::connect(&config)
        .await
        .context("Database is not reachable")?;

    db::close(&pool).await;
    println!("database: OK");
    Ok(())
}

/// Create the news and jobs tables if missing
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let config = args.db.database_config()?;
    let pool = db::connect(&config)
        .await
        .context("Failed to create database pool")?;

    let result = schema::ensure_schema(&pool)
        .await
        .context("Failed to apply schema");
    db::close(&pool).await;
    result?;

    tracing::info!("Schema is up to date");
    Ok(())
}
