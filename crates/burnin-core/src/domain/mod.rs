//! Domain entities for the burn-in settings broker.
//!
//! This module contains pure business-logic types with no infrastructure
//! dependencies: the settings document is a plain value that can be compiled
//! and tested on any platform without any external setup.
//!
//! Code in outer layers (the sanitizer, the store, the HTTP gateway) depends
//! on these types, but they never depend back on those layers.

/// The canonical settings document schema.
///
/// See [`document::SettingsDocument`] for the root type.
pub mod document;

// Re-export the schema types at the domain module boundary so callers can
// write `domain::SettingsDocument` instead of the longer path.
pub use document::{Align, CustomFields, Element, FontWeight, SettingsDocument, TemplateParts};
