//! noticeboard CLI - community noticeboard API server and database tools
//!
//! Subcommands:
//! - `serve` runs the HTTP API (news and job postings)
//! - `check-db` verifies the database is reachable
//! - `migrate` creates the `news` and `jobs` tables if missing

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "noticeboard",
    author,
    version,
    about = "Community noticeboard API: news and job postings over HTTP",
    long_about = "Serves published news and open job postings as JSON, backed by PostgreSQL. \
                  Settings come from flags, the environment, or a local .env file."
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Connect to the database and run a liveness query
    CheckDb(commands::db::CheckDbArgs),
    /// Create the news and jobs tables if they do not exist
    Migrate(commands::db::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // a missing .env is fine; real environment variables still apply
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(cli.debug, cli.otel).ok();

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::CheckDb(args) => commands::run_check_db(args).await,
        Commands::Migrate(args) => commands::run_migrate(args).await,
    };

    tracing_setup::shutdown();
    result
}
