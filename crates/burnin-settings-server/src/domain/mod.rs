//! Domain layer for burnin-settings-server.
//!
//! Pure business-logic types with no dependencies on I/O, networking, or
//! external frameworks.
//!
//! # What belongs in the domain layer?
//!
//! - The reply envelope (the JSON "language" between editor and broker)
//! - Configuration structures
//!
//! # What does NOT belong here?
//!
//! - Any `tokio`, `TcpListener`, or `axum` types
//! - File I/O or environment variable reading

pub mod config;
pub mod messages;

// Re-export the most commonly needed types at the domain module boundary
// so callers can write `domain::ServerConfig` instead of the longer path.
pub use config::ServerConfig;
pub use messages::GatewayReply;
