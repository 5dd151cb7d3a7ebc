//! JSON reply envelopes for the editor-facing HTTP protocol.
//!
//! Every response body the broker sends is an object whose outermost
//! discriminator is the boolean `ok` field:
//!
//! ```json
//! {"ok": true,  "data": { ...settings document... }}
//! {"ok": true,  "path": "burnin_web_settings.json"}
//! {"ok": false, "error": "settings file is not valid JSON"}
//! ```
//!
//! The editor branches on `ok` first and only then looks at the payload
//! field, so the three shapes never share payload keys.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A reply envelope, one variant per payload shape.
///
/// # Serde representation
///
/// `ok` is a plain boolean field, not a serde tag, so the enum is untagged:
/// each variant's distinct payload key (`data` / `path` / `error`)
/// disambiguates when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GatewayReply {
    /// Successful load: the stored document, or `{}` when none was saved yet.
    Loaded {
        /// Always `true`.
        ok: bool,
        /// The settings document as stored, or an empty object.
        data: Value,
    },

    /// Successful save: reports where the document was written.
    Saved {
        /// Always `true`.
        ok: bool,
        /// The backing file path.
        path: String,
    },

    /// Any failure: unknown route, undecodable body, or a store error.
    Failed {
        /// Always `false`.
        ok: bool,
        /// Human-readable error message.
        error: String,
    },
}

impl GatewayReply {
    /// Builds a load-success reply.
    pub fn loaded(data: Value) -> Self {
        GatewayReply::Loaded { ok: true, data }
    }

    /// Builds a save-success reply carrying the backing file path.
    pub fn saved(path: impl Into<String>) -> Self {
        GatewayReply::Saved {
            ok: true,
            path: path.into(),
        }
    }

    /// Builds a failure reply.
    pub fn failed(error: impl Into<String>) -> Self {
        GatewayReply::Failed {
            ok: false,
            error: error.into(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
