//! Rendering-oriented field nodes.

use serde::{Deserialize, Serialize};

/// The mapper's output node: one editable field of a parameter form.
///
/// Wire format is the form-renderer DTO (camelCase keys). `manifest_key`
/// is the key under which a value for this field is written back into
/// configuration data; it currently always equals `name` but is a
/// separate concern from the display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub manifest_key: String,
    /// Child fields, for object-kind fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Field>,
    /// Element shape, for array-kind fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Field>>,
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<serde_json::Value>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
}

/// The rendering type of a [`Field`].
///
/// Distinct from the schema's source type: integers render as numbers,
/// and objects split into `Object` (declared children) versus `Map`
/// (open key-value bag). Unknown names pass through [`FieldKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Map,
    Other(String),
}

impl FieldKind {
    /// The raw type string as it appears in field JSON.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Map => "map",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for FieldKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "string" => Self::String,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "array" => Self::Array,
            "object" => Self::Object,
            "map" => Self::Map,
            _ => Self::Other(raw),
        }
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Other(raw) => raw,
            known => known.name().to_string(),
        }
    }
}

/// A named, pre-resolved field subtree representing an embeddable
/// sub-unit's own parameter surface.
///
/// Dependencies are supplied by the caller (already mapped), not derived
/// from the schema being mapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Dependency {
    /// Creates a dependency subtree.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}
