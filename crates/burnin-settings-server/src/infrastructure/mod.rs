//! Infrastructure layer for burnin-settings-server.
//!
//! The infrastructure layer handles all I/O: reading and writing the
//! settings file and serving the editor-facing HTTP endpoints.
//!
//! # Responsibilities
//!
//! - Atomic persistence of the settings document (`store`)
//! - Binding the HTTP listener, routing, CORS headers (`http_server`)
//! - Graceful shutdown on Ctrl+C
//!
//! # What does NOT belong here?
//!
//! - Sanitization rules (that is `burnin-core`)
//! - Reply envelope definitions (that is the domain layer)
//! - Configuration parsing (that is done in `main.rs`)

pub mod http_server;
pub mod store;

// Re-export the primary entry points so `main.rs` can call them concisely.
pub use http_server::run_server;
pub use store::{SettingsStore, StoreError};
