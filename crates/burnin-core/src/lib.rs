//! # burnin-core
//!
//! Shared library for the Stills Marker settings broker containing the
//! canonical burn-in settings schema and the sanitizer that coerces untrusted
//! JSON into it.
//!
//! This crate is used by the settings server and by any tool that needs to
//! read or produce the settings document.  It has zero dependencies on OS
//! APIs, file systems, or network sockets.
//!
//! # What is a burn-in overlay? (for beginners)
//!
//! Stills Marker stamps ("burns in") text overlays onto exported images:
//! a title, a timestamp, a frame counter, and so on.  Each overlay slot is an
//! **element** with a position, font, color, and alignment.  The web editor
//! lets the user drag these elements around and then saves the whole
//! arrangement as one JSON document.
//!
//! This crate defines:
//!
//! - **`domain`** – The canonical document shape: [`SettingsDocument`],
//!   [`Element`], and the constrained enums [`Align`] and [`FontWeight`].
//!
//! - **`sanitize`** – The normalization routine.  The editor runs in a
//!   browser, so the server must assume the inbound document is hostile or
//!   buggy.  [`sanitize_document`] is a *total* function: it accepts any
//!   JSON value whatsoever and always produces a schema-valid document,
//!   degrading each malformed field to its documented default.

// Declare the two top-level modules.  Rust will look for each in a
// subdirectory with the same name (e.g., src/domain/mod.rs).
pub mod domain;
pub mod sanitize;

// Re-export the most-used types at the crate root so callers can write
// `burnin_core::SettingsDocument` instead of the longer module path.
pub use domain::document::{
    Align, CustomFields, Element, FontWeight, SettingsDocument, TemplateParts,
};
pub use sanitize::document::{sanitize_document, sanitize_element};
