//! Sanitization of untrusted settings payloads.
//!
//! The web editor posts a JSON document the server must not trust: fields may
//! be missing, mistyped, out of range, or structurally mangled.  This module
//! turns *any* [`serde_json::Value`] into a schema-valid
//! [`SettingsDocument`](crate::domain::document::SettingsDocument).
//!
//! # Design
//!
//! The sanitizer is the last line of defense against a hostile or buggy
//! client, so it is written as a **total function**: there is no error path.
//! Every coercion failure degrades to the field's documented default, and a
//! failure in one field never affects its siblings.
//!
//! The coercion rules live in [`coerce`] as small, independently tested
//! functions; [`document`] composes them field-by-field into the full
//! normalization routine.

pub mod coerce;
pub mod document;

// Re-export the primary entry point so callers can write
// `sanitize::sanitize_document` without the extra path segment.
pub use document::{sanitize_document, sanitize_element};
