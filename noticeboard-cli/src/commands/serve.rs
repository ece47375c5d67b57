//! HTTP server command

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use noticeboard_server::config::parse_origins;
use noticeboard_server::db;
use noticeboard_server::http::run_server;
use noticeboard_server::ServerConfig;

use super::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Comma-separated allowed CORS origins, or `*` for any
    #[arg(long, env = "CORS_ALLOWED_ORIGINS", default_value = "http://localhost:3000")]
    pub cors_origins: String,

    /// Seconds before an in-flight request is cancelled
    #[arg(long, default_value_t = 30)]
    pub request_timeout: u64,

    #[command(flatten)]
    pub db: DbArgs,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            cors_origins: parse_origins(&self.cors_origins),
            request_timeout: Duration::from_secs(self.request_timeout),
        }
    }
}

/// Run the HTTP server until ctrl-c or SIGTERM
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.db.database_config()?;
    let config = args.server_config();

    tracing::info!(
        bind = %config.bind_addr,
        origins = ?config.cors_origins,
        "Starting noticeboard server"
    );

    let pool = db::connect(&db_config)
        .await
        .context("Failed to create database pool")?;

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser, Debug)]
    struct Wrapper {
        #[command(flatten)]
        serve: ServeArgs,
    }

    #[test]
    fn flags_build_server_config() {
        let wrapper = Wrapper::try_parse_from([
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--cors-origins",
            "https://a.example, https://b.example",
            "--request-timeout",
            "5",
            "--database-url",
            "postgres://localhost/noticeboard",
        ])
        .unwrap();

        let config = wrapper.serve.server_config();
        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.cors_origins, vec!["https://a.example", "https://b.example"]);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn pool_size_flags_override_defaults() {
        let wrapper = Wrapper::try_parse_from([
            "serve",
            "--database-url",
            "postgres://localhost/noticeboard",
            "--max-connections",
            "4",
            "--min-connections",
            "1",
        ])
        .unwrap();

        let db = wrapper.serve.db.database_config().unwrap();
        assert_eq!(db.url, "postgres://localhost/noticeboard");
        assert_eq!(db.max_connections, 4);
        assert_eq!(db.min_connections, 1);
    }
}
