//! Load/save use-cases.
//!
//! These functions sit between the HTTP gateway and the core: they run the
//! sanitizer, drive the store, and assemble the reply envelope.  They carry
//! no HTTP types, which keeps them callable from tests (and any future
//! non-HTTP front end) without a running server.
//!
//! Error regimes meet here: field-level sanitization never errors (the
//! sanitizer is total), while store failures propagate as [`StoreError`] for
//! the gateway to surface.

use serde_json::{Map, Value};

use burnin_core::sanitize_document;

use crate::domain::messages::GatewayReply;
use crate::infrastructure::store::{SettingsStore, StoreError};

/// Loads the stored settings document.
///
/// A store that has never been written replies with an empty object, which
/// the editor treats as "use built-in defaults" — a missing file is a normal
/// first-run condition, not an error.
///
/// # Errors
///
/// Returns [`StoreError`] when the backing file exists but cannot be read or
/// parsed.  The gateway reports this as a server error; it is never silently
/// defaulted away.
pub fn load_settings(store: &SettingsStore) -> Result<GatewayReply, StoreError> {
    let data = match store.load()? {
        Some(document) => serde_json::to_value(document).map_err(StoreError::Serialize)?,
        None => Value::Object(Map::new()),
    };
    Ok(GatewayReply::loaded(data))
}

/// Sanitizes `payload` and persists the resulting document wholesale.
///
/// The payload may be any JSON value; the sanitizer repairs it into a
/// canonical document before anything touches disk.  The reply carries the
/// backing file path so the editor can show the user where their settings
/// live.
///
/// # Errors
///
/// Returns [`StoreError`] when the document cannot be written.
pub fn save_settings(store: &SettingsStore, payload: &Value) -> Result<GatewayReply, StoreError> {
    let document = sanitize_document(payload);
    store.save(&document)?;
    Ok(GatewayReply::saved(store.path().display().to_string()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
