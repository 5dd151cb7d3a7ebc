//! burnin-settings-server library crate.
//!
//! This crate provides the local settings broker for the Stills Marker
//! burn-in overlay editor: a small HTTP service that loads and persists one
//! JSON settings document, sanitizing every inbound payload through
//! `burnin-core` before it touches disk.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Web editor (JSON over HTTP)
//!         ↕
//! [burnin-settings-server]
//!   ├── domain/           Pure types: reply envelopes, ServerConfig
//!   ├── application/      Use-cases: load/save orchestration
//!   └── infrastructure/
//!         ├── store/       Atomic JSON persistence
//!         └── http_server/ axum router, CORS, graceful shutdown
//!         ↕
//! burnin_web_settings.json (one file on disk)
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no external dependencies (no I/O, no async, no frameworks).
//! - `application` depends on `domain` and `burnin-core` only.
//! - `infrastructure` depends on all other layers plus `tokio` and `axum`.

/// Domain layer: pure business-logic types (no I/O).
pub mod domain;

/// Application layer: load/save use-cases.
pub mod application;

/// Infrastructure layer: settings store and HTTP gateway.
pub mod infrastructure;
