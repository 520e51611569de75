//! Declared parameter schema nodes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node in a template's declared parameter schema.
///
/// The wire format is the template's own schema JSON (camelCase keys,
/// `type`/`enum` spelled as in JSON Schema). Child properties live in a
/// `BTreeMap` so iteration is deterministic by name; the source
/// collection is unordered, and display ordering is applied separately
/// from the sibling `order` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Property {
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Child properties, present when the node is object-like.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Property>,
    /// Element schema, present when `kind` is array.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Property>>,
    /// Display order of child names. Only meaningful on the node that
    /// owns `properties`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order: Vec<String>,
    /// Allowed literal values.
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<serde_json::Value>,
    pub required: bool,
    /// Hint for string properties holding file content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
}

impl Default for Property {
    fn default() -> Self {
        Self {
            kind: PropertyKind::default(),
            title: None,
            description: String::new(),
            properties: BTreeMap::new(),
            items: None,
            order: Vec::new(),
            enum_values: Vec::new(),
            required: false,
            file_extension: None,
            minimum: None,
            maximum: None,
            multiple_of: None,
            min_length: None,
            max_length: None,
        }
    }
}

impl Property {
    fn of_kind(kind: PropertyKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Shorthand for a string property.
    #[must_use]
    pub fn string() -> Self {
        Self::of_kind(PropertyKind::String)
    }

    /// Shorthand for an integer property.
    #[must_use]
    pub fn integer() -> Self {
        Self::of_kind(PropertyKind::Integer)
    }

    /// Shorthand for a boolean property.
    #[must_use]
    pub fn boolean() -> Self {
        Self::of_kind(PropertyKind::Boolean)
    }

    /// Shorthand for an array property with the given element schema.
    #[must_use]
    pub fn array(items: Self) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of_kind(PropertyKind::Array)
        }
    }

    /// Shorthand for an object property with named children.
    #[must_use]
    pub fn object<N: Into<String>>(children: impl IntoIterator<Item = (N, Self)>) -> Self {
        Self {
            properties: children
                .into_iter()
                .map(|(name, child)| (name.into(), child))
                .collect(),
            ..Self::of_kind(PropertyKind::Object)
        }
    }

    /// Shorthand for an open key-value bag: an object with no declared
    /// children.
    #[must_use]
    pub fn map() -> Self {
        Self::of_kind(PropertyKind::Object)
    }

    /// Sets the display label.
    #[must_use]
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the display order of child names.
    #[must_use]
    pub fn ordered<N: Into<String>>(mut self, names: impl IntoIterator<Item = N>) -> Self {
        self.order = names.into_iter().map(Into::into).collect();
        self
    }

    /// Marks the property as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the allowed literal values.
    #[must_use]
    pub fn with_enum(mut self, values: Vec<serde_json::Value>) -> Self {
        self.enum_values = values;
        self
    }
}

/// The declared type of a [`Property`].
///
/// Serialized as the raw type string. Unknown type names are carried
/// through [`PropertyKind::Other`] unchanged rather than rejected, so
/// schemas written against a newer vocabulary still map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyKind {
    String,
    Integer,
    Boolean,
    Array,
    Object,
    Other(String),
}

impl PropertyKind {
    /// The raw type string as it appears in schema JSON.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Other(raw) => raw,
        }
    }
}

impl Default for PropertyKind {
    fn default() -> Self {
        Self::Object
    }
}

impl From<String> for PropertyKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "string" => Self::String,
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "array" => Self::Array,
            "object" => Self::Object,
            _ => Self::Other(raw),
        }
    }
}

impl From<PropertyKind> for String {
    fn from(kind: PropertyKind) -> Self {
        match kind {
            PropertyKind::Other(raw) => raw,
            known => known.name().to_string(),
        }
    }
}
