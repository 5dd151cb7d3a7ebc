//! Broker configuration types.
//!
//! [`ServerConfig`] is the single source of truth for all runtime settings.
//! It can be constructed from CLI arguments (preferred for production) or
//! from sensible defaults (useful for local development and tests).
//!
//! Keeping configuration as a plain struct (no global state, no environment
//! variable reads inside the domain) makes the broker easy to embed in tests.
//! `main.rs` is responsible for populating the struct from CLI args or
//! environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

/// All runtime configuration for the settings broker.
///
/// # Example
///
/// ```rust
/// use burnin_settings_server::domain::ServerConfig;
///
/// // Defaults are suitable for local development:
/// let cfg = ServerConfig::default();
/// assert_eq!(cfg.bind_addr.port(), 8765);
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address and port the HTTP listener binds to.
    ///
    /// The broker serves a single local editor, so the default binds the
    /// loopback interface only.  Set to `0.0.0.0` to accept connections from
    /// other machines on the LAN.
    pub bind_addr: SocketAddr,

    /// Path of the JSON settings file the broker owns.
    ///
    /// Relative paths resolve against the broker's working directory.
    pub settings_path: PathBuf,
}

impl Default for ServerConfig {
    /// Returns a `ServerConfig` matching the editor's expectations without
    /// any external configuration: loopback port 8765, settings file next to
    /// the working directory.
    fn default() -> Self {
        Self {
            // Safe to unwrap: a compile-time-known valid socket address string.
            bind_addr: "127.0.0.1:8765".parse().unwrap(),
            settings_path: PathBuf::from("burnin_web_settings.json"),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
