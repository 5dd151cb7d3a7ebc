//! Document-level normalization: arbitrary JSON → canonical settings.
//!
//! [`sanitize_document`] implements the full schema repair described in the
//! crate docs.  It never fails: the output always satisfies the schema
//! invariants (clamped numerics, trimmed strings, constrained enums), no
//! matter what the input looked like.
//!
//! Dropped items (non-object entries, keyless elements) are logged at debug
//! level and otherwise ignored — a malformed element is not worth failing a
//! save over.

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::document::{
    Align, CustomFields, Element, FontWeight, SettingsDocument, TemplateParts,
    CUSTOM_ELEMENT_KEY, DEFAULT_COLOR, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE_PT,
    DEFAULT_OPACITY, DEFAULT_POSITION, MAX_FONT_SIZE_PT, MIN_FONT_SIZE_PT,
};
use crate::sanitize::coerce;

/// Ordered source keys for an element's color.  `font_color` is a legacy
/// alias kept for documents written by older editor builds; later aliases
/// slot in here.
const COLOR_SOURCE_KEYS: &[&str] = &["color", "font_color"];

/// Normalizes an untrusted JSON value into a canonical [`SettingsDocument`].
///
/// Total function: every malformed, missing, or mistyped field degrades to
/// its documented default, independently of its siblings.  A non-object
/// input produces the default document; a non-list `elements` field produces
/// a document with zero elements.
///
/// # Example
///
/// ```rust
/// use burnin_core::{sanitize_document, Align};
/// use serde_json::json;
///
/// let doc = sanitize_document(&json!({
///     "burnin_opacity": "2.5",
///     "elements": [
///         {"key": "title", "align": "LEFT"},
///         {"key": "   "},
///     ],
/// }));
///
/// assert_eq!(doc.burnin_opacity, 1.0);          // out of range → clamped
/// assert_eq!(doc.elements.len(), 1);            // blank key → dropped
/// assert_eq!(doc.elements[0].align, Align::Left); // case-insensitive enum
/// ```
pub fn sanitize_document(input: &Value) -> SettingsDocument {
    let root = input.as_object();
    let field = |key: &str| root.and_then(|map| map.get(key));

    let burnin_font_family = coerce::string_or(field("burnin_font_family"), DEFAULT_FONT_FAMILY);

    let mut elements = Vec::new();
    if let Some(Value::Array(items)) = field("elements") {
        for (index, item) in items.iter().enumerate() {
            match sanitize_element(item, &burnin_font_family) {
                Some(element) => elements.push(element),
                None => debug!(index, "dropped element without a usable key"),
            }
        }
    }

    SettingsDocument {
        burnin_font_path: coerce::string_or(field("burnin_font_path"), ""),
        burnin_opacity: coerce::float_or(field("burnin_opacity"), DEFAULT_OPACITY)
            .clamp(0.0, 1.0),
        burnin_font_family,
        elements,
    }
}

/// Normalizes a single element entry.
///
/// Returns `None` when the entry cannot identify an overlay slot: it is not
/// an object, or its `key` is empty after trimming.  Everything else repairs
/// to a valid [`Element`], with `document_font_family` as the fallback for a
/// missing `font_family`.
pub fn sanitize_element(item: &Value, document_font_family: &str) -> Option<Element> {
    let map = item.as_object()?;

    let key = coerce::string_or(map.get("key"), "");
    if key.is_empty() {
        return None;
    }

    // The custom slot carries extra template fields; extraction is purely
    // additive on top of the common fields.
    let custom = (key == CUSTOM_ELEMENT_KEY).then(|| sanitize_custom_fields(map));

    Some(Element {
        x: coerce::float_or(map.get("x"), DEFAULT_POSITION).clamp(0.0, 1.0),
        y: coerce::float_or(map.get("y"), DEFAULT_POSITION).clamp(0.0, 1.0),
        font_size_pt: coerce::int_via_float_or(map.get("font_size_pt"), DEFAULT_FONT_SIZE_PT as i64)
            .clamp(MIN_FONT_SIZE_PT as i64, MAX_FONT_SIZE_PT as i64) as u32,
        opacity: coerce::float_or(map.get("opacity"), DEFAULT_OPACITY).clamp(0.0, 1.0),
        align: Align::from_loose(&coerce::string_or(map.get("align"), "")),
        font_family: coerce::string_or(map.get("font_family"), document_font_family),
        font_weight: FontWeight::from_loose(&coerce::string_or(map.get("font_weight"), "")),
        color: coerce::first_string_of(map, COLOR_SOURCE_KEYS, DEFAULT_COLOR),
        key,
        custom,
    })
}

/// Extracts the custom-element payload with per-field fallbacks.
///
/// `template_parts` must be an object holding a list-valued `parts`; any
/// other shape collapses to `{"parts": []}` and the rest of the malformed
/// structure is discarded.  `custom_tokens` keeps only tokens that are
/// non-empty after string coercion and trimming.
fn sanitize_custom_fields(map: &Map<String, Value>) -> CustomFields {
    let template_parts = match map.get("template_parts").and_then(Value::as_object) {
        Some(tp) => match tp.get("parts") {
            Some(Value::Array(parts)) => TemplateParts {
                parts: parts.clone(),
            },
            _ => TemplateParts::default(),
        },
        None => TemplateParts::default(),
    };

    let custom_tokens = match map.get("custom_tokens") {
        Some(Value::Array(tokens)) => tokens
            .iter()
            .map(|token| coerce::string_or(Some(token), ""))
            .filter(|token| !token.is_empty())
            .collect(),
        _ => Vec::new(),
    };

    CustomFields {
        template_custom: coerce::string_or(map.get("template_custom"), ""),
        template_parts,
        custom_tokens,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
