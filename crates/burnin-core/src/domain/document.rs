//! The canonical burn-in settings document.
//!
//! One document describes the complete overlay arrangement for an export:
//! global font settings plus an ordered list of overlay elements.  The
//! document is a pure value — no identity, no cross-references — and is
//! persisted wholesale: a save replaces the previous document entirely.
//!
//! # Serde representation
//!
//! The document serializes to the exact JSON shape the web editor and the
//! burn-in engine exchange:
//!
//! ```json
//! {
//!   "burnin_font_path": "/fonts/DejaVuSans.ttf",
//!   "burnin_opacity": 0.9,
//!   "burnin_font_family": "Arial",
//!   "elements": [
//!     {"key": "title", "x": 0.5, "y": 0.1, "font_size_pt": 24,
//!      "opacity": 1.0, "align": "center", "font_family": "Arial",
//!      "font_weight": "bold", "color": "#ffffff"}
//!   ]
//! }
//! ```
//!
//! Elements whose `key` is `"custom"` carry three extra fields flattened into
//! the same object: `template_custom`, `template_parts`, and `custom_tokens`.

use serde::{Deserialize, Serialize};

/// Font family used when a document or element does not name one.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Overlay text color used when both `color` and the legacy `font_color`
/// source fields are absent or blank.
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Default opacity for the document and for each element, and the upper
/// clamp bound for both.
pub const DEFAULT_OPACITY: f64 = 1.0;

/// Default normalized position for an element on either axis.
pub const DEFAULT_POSITION: f64 = 0.5;

/// Default font size for an element, in points.
pub const DEFAULT_FONT_SIZE_PT: u32 = 24;

/// Smallest accepted font size, in points.
pub const MIN_FONT_SIZE_PT: u32 = 4;

/// Largest accepted font size, in points.
pub const MAX_FONT_SIZE_PT: u32 = 400;

/// The element key that carries the custom-template fields.
pub const CUSTOM_ELEMENT_KEY: &str = "custom";

// ── Root document ─────────────────────────────────────────────────────────────

/// The root settings document.
///
/// Serde defaults on every field let a hand-trimmed file on disk load with
/// the documented fallbacks; documents produced by the sanitizer always carry
/// all fields explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsDocument {
    /// Filesystem path of the font file handed to the burn-in engine.
    /// Empty means "engine default".
    #[serde(default)]
    pub burnin_font_path: String,

    /// Global overlay opacity in [0.0, 1.0].
    #[serde(default = "default_opacity")]
    pub burnin_opacity: f64,

    /// Document-wide font family; also the fallback for elements that do not
    /// name their own.
    #[serde(default = "default_font_family")]
    pub burnin_font_family: String,

    /// Overlay elements in editor order.  Order is preserved and duplicate
    /// keys are allowed — the engine renders them in sequence.
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Default for SettingsDocument {
    fn default() -> Self {
        Self {
            burnin_font_path: String::new(),
            burnin_opacity: DEFAULT_OPACITY,
            burnin_font_family: DEFAULT_FONT_FAMILY.to_string(),
            elements: Vec::new(),
        }
    }
}

fn default_opacity() -> f64 {
    DEFAULT_OPACITY
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

// ── Elements ──────────────────────────────────────────────────────────────────

/// One overlay slot: a positioned, styled piece of burn-in text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Identifies the overlay slot (e.g., `"title"`, `"timecode"`).
    /// Always non-empty; the sanitizer drops keyless items.
    pub key: String,

    /// Horizontal anchor position as a fraction of the image width, in
    /// [0.0, 1.0].
    pub x: f64,

    /// Vertical anchor position as a fraction of the image height, in
    /// [0.0, 1.0].
    pub y: f64,

    /// Font size in points, between [`MIN_FONT_SIZE_PT`] and
    /// [`MAX_FONT_SIZE_PT`] inclusive.
    pub font_size_pt: u32,

    /// Element opacity in [0.0, 1.0], multiplied with the document opacity
    /// by the engine.
    pub opacity: f64,

    /// Horizontal text alignment relative to the anchor.
    pub align: Align,

    /// Font family for this element.  Falls back to the document's
    /// `burnin_font_family` when the source document omits it.
    pub font_family: String,

    /// Normal or bold rendering.
    pub font_weight: FontWeight,

    /// Text color as the engine expects it (typically `"#rrggbb"`).
    pub color: String,

    /// Extra fields carried only by the `"custom"` element.  Flattened into
    /// the element object on disk; absent for every other key.
    #[serde(flatten)]
    pub custom: Option<CustomFields>,
}

/// Horizontal text alignment.  Serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

impl Align {
    /// Parses a user-supplied alignment string, accepting any letter case.
    /// Anything that is not a member of the enum falls back to [`Align::Center`].
    pub fn from_loose(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "left" => Align::Left,
            "center" => Align::Center,
            "right" => Align::Right,
            _ => Align::Center,
        }
    }
}

/// Font weight.  Serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Parses a user-supplied weight string, accepting any letter case.
    /// Anything that is not a member of the enum falls back to
    /// [`FontWeight::Normal`].
    pub fn from_loose(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "normal" => FontWeight::Normal,
            "bold" => FontWeight::Bold,
            _ => FontWeight::Normal,
        }
    }
}

// ── Custom element payload ────────────────────────────────────────────────────

/// The three extra fields carried by the `"custom"` element.
///
/// The custom slot lets the user compose their own overlay text out of
/// template parts and free-form tokens; the engine interprets the structure,
/// the broker only ferries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFields {
    /// Free-form template string typed by the user.
    pub template_custom: String,

    /// Structured template description.  The broker treats the inner parts
    /// as opaque values.
    pub template_parts: TemplateParts,

    /// User-supplied token strings, already trimmed and non-empty.
    pub custom_tokens: Vec<String>,
}

/// Wrapper around the opaque template part list.
///
/// Kept as its own type so the on-disk shape is always `{"parts": [...]}`
/// even when the source structure was malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateParts {
    /// Opaque part descriptions, passed through to the engine verbatim.
    pub parts: Vec<serde_json::Value>,
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain_element() -> Element {
        Element {
            key: "title".to_string(),
            x: 0.5,
            y: 0.5,
            font_size_pt: DEFAULT_FONT_SIZE_PT,
            opacity: 1.0,
            align: Align::Center,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_weight: FontWeight::Normal,
            color: DEFAULT_COLOR.to_string(),
            custom: None,
        }
    }

    #[test]
    fn test_default_document_matches_documented_defaults() {
        let doc = SettingsDocument::default();
        assert_eq!(doc.burnin_font_path, "");
        assert_eq!(doc.burnin_opacity, 1.0);
        assert_eq!(doc.burnin_font_family, "Arial");
        assert!(doc.elements.is_empty());
    }

    #[test]
    fn test_align_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Align::Left).unwrap(), json!("left"));
        assert_eq!(serde_json::to_value(Align::Center).unwrap(), json!("center"));
        assert_eq!(serde_json::to_value(Align::Right).unwrap(), json!("right"));
    }

    #[test]
    fn test_font_weight_serializes_lowercase() {
        assert_eq!(serde_json::to_value(FontWeight::Normal).unwrap(), json!("normal"));
        assert_eq!(serde_json::to_value(FontWeight::Bold).unwrap(), json!("bold"));
    }

    #[test]
    fn test_align_from_loose_accepts_any_case() {
        assert_eq!(Align::from_loose("RIGHT"), Align::Right);
        assert_eq!(Align::from_loose("Left"), Align::Left);
        assert_eq!(Align::from_loose("center"), Align::Center);
    }

    #[test]
    fn test_align_from_loose_rejects_non_members() {
        // "up" is not an alignment; the constrained default applies.
        assert_eq!(Align::from_loose("up"), Align::Center);
        assert_eq!(Align::from_loose(""), Align::Center);
    }

    #[test]
    fn test_font_weight_from_loose_accepts_any_case() {
        assert_eq!(FontWeight::from_loose("BOLD"), FontWeight::Bold);
        assert_eq!(FontWeight::from_loose("normal"), FontWeight::Normal);
    }

    #[test]
    fn test_font_weight_from_loose_rejects_non_members() {
        assert_eq!(FontWeight::from_loose("heavy"), FontWeight::Normal);
        assert_eq!(FontWeight::from_loose(""), FontWeight::Normal);
    }

    #[test]
    fn test_plain_element_omits_custom_fields_when_serialized() {
        // Arrange
        let element = plain_element();

        // Act
        let value = serde_json::to_value(&element).unwrap();

        // Assert — the flattened Option must not leak any custom keys
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("template_custom"));
        assert!(!obj.contains_key("template_parts"));
        assert!(!obj.contains_key("custom_tokens"));
    }

    #[test]
    fn test_custom_element_flattens_custom_fields() {
        // Arrange
        let mut element = plain_element();
        element.key = CUSTOM_ELEMENT_KEY.to_string();
        element.custom = Some(CustomFields {
            template_custom: "{shot} / {date}".to_string(),
            template_parts: TemplateParts {
                parts: vec![json!({"token": "shot"})],
            },
            custom_tokens: vec!["shot".to_string()],
        });

        // Act
        let value = serde_json::to_value(&element).unwrap();

        // Assert — custom fields sit at the element's top level
        let obj = value.as_object().unwrap();
        assert_eq!(obj["template_custom"], json!("{shot} / {date}"));
        assert_eq!(obj["template_parts"], json!({"parts": [{"token": "shot"}]}));
        assert_eq!(obj["custom_tokens"], json!(["shot"]));
    }

    #[test]
    fn test_element_round_trips_through_json() {
        let mut element = plain_element();
        element.custom = Some(CustomFields {
            template_custom: String::new(),
            template_parts: TemplateParts::default(),
            custom_tokens: Vec::new(),
        });

        let text = serde_json::to_string(&element).unwrap();
        let restored: Element = serde_json::from_str(&text).unwrap();

        assert_eq!(element, restored);
    }

    #[test]
    fn test_plain_element_deserializes_with_no_custom_fields() {
        let value = serde_json::to_value(plain_element()).unwrap();
        let restored: Element = serde_json::from_value(value).unwrap();
        assert_eq!(restored.custom, None);
    }

    #[test]
    fn test_document_round_trips_through_json() {
        let doc = SettingsDocument {
            burnin_font_path: "/fonts/a.ttf".to_string(),
            burnin_opacity: 0.75,
            burnin_font_family: "Helvetica".to_string(),
            elements: vec![plain_element()],
        };

        let text = serde_json::to_string_pretty(&doc).unwrap();
        let restored: SettingsDocument = serde_json::from_str(&text).unwrap();

        assert_eq!(doc, restored);
    }

    #[test]
    fn test_document_deserializes_missing_fields_to_defaults() {
        // A hand-trimmed file carrying only one field still loads.
        let doc: SettingsDocument = serde_json::from_str(r#"{"burnin_opacity": 0.5}"#).unwrap();
        assert_eq!(doc.burnin_opacity, 0.5);
        assert_eq!(doc.burnin_font_family, "Arial");
        assert_eq!(doc.burnin_font_path, "");
        assert!(doc.elements.is_empty());
    }
}
