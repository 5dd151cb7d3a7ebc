//! Burn-in settings broker — entry point.
//!
//! This binary serves the Stills Marker web editor's settings over local
//! HTTP: `GET /load` returns the stored burn-in settings document and
//! `POST /save` sanitizes and persists a new one.  It owns exactly one JSON
//! file on disk and replaces it atomically on every save.
//!
//! # Why a broker process?
//!
//! The editor runs in a browser, which cannot write files.  The broker is
//! the trusted local side: it accepts whatever document the page posts,
//! repairs it into the canonical schema, and keeps the on-disk copy the
//! burn-in engine reads.
//!
//! # Usage
//!
//! ```text
//! burnin-settings-server [OPTIONS]
//!
//! Options:
//!   --port          <PORT>  HTTP listener port [default: 8765]
//!   --bind          <ADDR>  Bind address [default: 127.0.0.1]
//!   --settings-path <PATH>  Settings file [default: burnin_web_settings.json]
//! ```
//!
//! # Environment variable overrides
//!
//! The CLI defaults can also be overridden with environment variables.
//! CLI args take precedence when both are present.
//!
//! | Variable               | Default                    |
//! |------------------------|----------------------------|
//! | `BURNIN_PORT`          | `8765`                     |
//! | `BURNIN_BIND`          | `127.0.0.1`                |
//! | `BURNIN_SETTINGS_PATH` | `burnin_web_settings.json` |

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use burnin_settings_server::domain::ServerConfig;
use burnin_settings_server::infrastructure::run_server;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Stills Marker burn-in settings broker.
///
/// Serves the web editor's settings document over local HTTP and persists it
/// atomically to one JSON file.
#[derive(Debug, Parser)]
#[command(
    name = "burnin-settings-server",
    about = "Local HTTP settings broker for the Stills Marker burn-in overlay editor",
    version
)]
struct Cli {
    /// TCP port for the HTTP listener.
    #[arg(long, default_value_t = 8765, env = "BURNIN_PORT")]
    port: u16,

    /// IP address to bind the listener to.
    ///
    /// The default accepts only local connections, which is all the editor
    /// needs.  Use `0.0.0.0` to accept connections from the LAN.
    #[arg(long, default_value = "127.0.0.1", env = "BURNIN_BIND")]
    bind: String,

    /// Path of the JSON settings file the broker owns.
    #[arg(
        long,
        default_value = "burnin_web_settings.json",
        env = "BURNIN_SETTINGS_PATH"
    )]
    settings_path: PathBuf,
}

impl Cli {
    /// Converts the parsed CLI arguments into a [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--bind` is not a valid IP address.
    fn into_server_config(self) -> anyhow::Result<ServerConfig> {
        let bind_addr: SocketAddr = format!("{}:{}", self.bind, self.port)
            .parse()
            .with_context(|| format!("invalid bind address: '{}:{}'", self.bind, self.port))?;

        Ok(ServerConfig {
            bind_addr,
            settings_path: self.settings_path,
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `RUST_LOG` controls the log level; absent or invalid falls back to info.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.into_server_config()?;

    info!(
        "burn-in settings broker starting — listen={}, file={}",
        config.bind_addr,
        config.settings_path.display()
    );

    run_server(config).await?;

    info!("burn-in settings broker stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
