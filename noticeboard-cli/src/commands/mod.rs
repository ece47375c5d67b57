//! Command implementations for the noticeboard CLI

use anyhow::{Context, Result};
use clap::Args;

use noticeboard_server::config::resolve_database_url;
use noticeboard_server::DatabaseConfig;

pub mod db;
pub mod serve;

pub use db::{run_check_db, run_migrate};
pub use serve::run_serve;

/// Database connection settings shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// PostgreSQL connection string (takes precedence over SUPABASE_URL)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Supabase project URL, used to derive the connection string
    #[arg(long, env = "SUPABASE_URL")]
    pub supabase_url: Option<String>,

    /// Database password for the derived Supabase connection string
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,

    /// Connections kept open while idle
    #[arg(long, env = "DB_MIN_CONNECTIONS", default_value_t = 2)]
    pub min_connections: u32,
}

impl DbArgs {
    /// Resolve the connection string and apply pool size overrides
    pub fn database_config(&self) -> Result<DatabaseConfig> {
        let url = resolve_database_url(
            self.database_url.as_deref(),
            self.supabase_url.as_deref(),
            self.db_password.as_deref(),
        )
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, SUPABASE_URL + DB_PASSWORD, or .env")?;

        Ok(DatabaseConfig {
            max_connections: self.max_connections,
            min_connections: self.min_connections,
            ..DatabaseConfig::new(url)
        })
    }
}
