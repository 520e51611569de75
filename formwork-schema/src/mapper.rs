//! The schema → field transform.

use crate::{Dependency, Field, FieldKind, Property, PropertyKind};
use std::collections::HashMap;

/// Maximum schema nesting depth the mapper will descend.
///
/// Schemas are trees by construction; the cap is a last-resort guard
/// against malformed cyclic input. Beyond it the mapper stops descending
/// and the affected field reports no children.
const MAX_DEPTH: usize = 64;

/// Projects a declared parameter schema into an ordered field tree,
/// appending one object field per dependency after all schema-derived
/// fields.
///
/// Total over well-formed input: performs no I/O and raises no errors.
/// An array property with no element schema simply yields a field with
/// no `items`. Output length is always the number of child properties
/// plus the number of dependencies.
#[must_use]
pub fn map_fields(schema: &Property, dependencies: &[Dependency]) -> Vec<Field> {
    let mut fields = map_schema(schema, 0);

    for dependency in dependencies {
        fields.push(Field {
            name: dependency.name.clone(),
            display_name: dependency.name.clone(),
            description: String::new(),
            kind: FieldKind::Object,
            manifest_key: String::new(),
            properties: dependency.fields.clone(),
            items: None,
            enum_values: Vec::new(),
            required: false,
            file_extension: None,
            minimum: None,
            maximum: None,
            multiple_of: None,
            min_length: None,
            max_length: None,
        });
    }

    fields
}

fn map_schema(schema: &Property, depth: usize) -> Vec<Field> {
    if depth >= MAX_DEPTH {
        tracing::warn!(depth, "schema nesting exceeds depth cap, truncating children");
        return Vec::new();
    }

    let mut fields = Vec::with_capacity(schema.properties.len());

    for (name, property) in &schema.properties {
        if property.kind == PropertyKind::Array {
            fields.push(Field {
                name: name.clone(),
                display_name: display_name(name, property),
                description: property.description.clone(),
                kind: field_kind(property),
                manifest_key: name.clone(),
                properties: Vec::new(),
                items: array_item(property.items.as_deref(), depth),
                enum_values: property.enum_values.clone(),
                required: property.required,
                file_extension: property.file_extension.clone(),
                minimum: property.minimum,
                maximum: property.maximum,
                multiple_of: property.multiple_of,
                min_length: property.min_length,
                max_length: property.max_length,
            });
            continue;
        }

        fields.push(Field {
            name: name.clone(),
            display_name: display_name(name, property),
            description: property.description.clone(),
            kind: field_kind(property),
            manifest_key: name.clone(),
            properties: map_schema(property, depth + 1),
            items: None,
            enum_values: property.enum_values.clone(),
            required: property.required,
            file_extension: property.file_extension.clone(),
            minimum: property.minimum,
            maximum: property.maximum,
            multiple_of: property.multiple_of,
            min_length: property.min_length,
            max_length: property.max_length,
        });
    }

    sort_fields(&mut fields, &schema.order);

    fields
}

/// Source-type → rendering-type rule.
///
/// Objects split on whether they declare children: none means an open
/// key-value bag (`Map`). Unknown source types pass through unchanged as
/// a forward-compatibility escape hatch.
fn field_kind(property: &Property) -> FieldKind {
    match &property.kind {
        PropertyKind::String => FieldKind::String,
        PropertyKind::Integer => FieldKind::Number,
        PropertyKind::Boolean => FieldKind::Boolean,
        PropertyKind::Array => FieldKind::Array,
        PropertyKind::Object if property.properties.is_empty() => FieldKind::Map,
        PropertyKind::Object => FieldKind::Object,
        PropertyKind::Other(raw) => FieldKind::Other(raw.clone()),
    }
}

/// Element descriptor for an array field.
///
/// The element's kind reports the source type verbatim (an integer
/// element stays `"integer"`), and its children are mapped with no
/// dependencies: dependencies only merge at the top level of one call.
fn array_item(item: Option<&Property>, depth: usize) -> Option<Box<Field>> {
    let item = item?;

    Some(Box::new(Field {
        name: String::new(),
        display_name: String::new(),
        description: String::new(),
        kind: FieldKind::from(item.kind.name().to_string()),
        manifest_key: String::new(),
        properties: map_schema(item, depth + 1),
        items: None,
        enum_values: Vec::new(),
        required: false,
        file_extension: None,
        minimum: None,
        maximum: None,
        multiple_of: None,
        min_length: None,
        max_length: None,
    }))
}

fn display_name(name: &str, property: &Property) -> String {
    match &property.title {
        Some(title) if !title.is_empty() => title.clone(),
        _ => name.to_string(),
    }
}

/// Position of a field name in the sibling `order` list.
///
/// Names missing from `order` rank as position 0, tied with the first
/// ordered name: they sort as if explicitly first, not last. The sort
/// is stable, so ties keep the deterministic name-sorted candidate
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortKey {
    Ordered(usize),
    Unordered,
}

impl SortKey {
    const fn rank(self) -> usize {
        match self {
            Self::Ordered(position) => position,
            Self::Unordered => 0,
        }
    }
}

fn sort_fields(fields: &mut [Field], order: &[String]) {
    let positions: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(position, name)| (name.as_str(), position))
        .collect();

    fields.sort_by_key(|field| {
        positions
            .get(field.name.as_str())
            .map_or(SortKey::Unordered, |&position| SortKey::Ordered(position))
            .rank()
    });
}
