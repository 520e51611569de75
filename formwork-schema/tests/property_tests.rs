use formwork_schema::{Property, PropertyKind};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── Shorthand constructors ───────────────────────────────────────

#[test]
fn string_shorthand() {
    let p = Property::string();
    assert_eq!(p.kind, PropertyKind::String);
    assert!(p.properties.is_empty());
    assert!(p.items.is_none());
}

#[test]
fn integer_shorthand() {
    assert_eq!(Property::integer().kind, PropertyKind::Integer);
}

#[test]
fn boolean_shorthand() {
    assert_eq!(Property::boolean().kind, PropertyKind::Boolean);
}

#[test]
fn array_shorthand_carries_element_schema() {
    let p = Property::array(Property::string());
    assert_eq!(p.kind, PropertyKind::Array);
    assert_eq!(p.items.as_deref().unwrap().kind, PropertyKind::String);
}

#[test]
fn object_shorthand_collects_children() {
    let p = Property::object([("replicas", Property::integer()), ("image", Property::string())]);
    assert_eq!(p.kind, PropertyKind::Object);
    assert_eq!(p.properties.len(), 2);
    assert_eq!(p.properties["replicas"].kind, PropertyKind::Integer);
}

#[test]
fn map_shorthand_is_object_with_no_children() {
    let p = Property::map();
    assert_eq!(p.kind, PropertyKind::Object);
    assert!(p.properties.is_empty());
}

#[test]
fn chainers_set_metadata() {
    let p = Property::string()
        .titled("Image tag")
        .described("Container image tag")
        .required()
        .with_enum(vec![json!("latest"), json!("stable")]);
    assert_eq!(p.title.as_deref(), Some("Image tag"));
    assert_eq!(p.description, "Container image tag");
    assert!(p.required);
    assert_eq!(p.enum_values, vec![json!("latest"), json!("stable")]);
}

#[test]
fn ordered_sets_child_order() {
    let p = Property::object([("a", Property::string())]).ordered(["a"]);
    assert_eq!(p.order, vec!["a".to_string()]);
}

// ── PropertyKind ─────────────────────────────────────────────────

#[test]
fn kind_name_is_raw_type_string() {
    assert_eq!(PropertyKind::String.name(), "string");
    assert_eq!(PropertyKind::Integer.name(), "integer");
    assert_eq!(PropertyKind::Boolean.name(), "boolean");
    assert_eq!(PropertyKind::Array.name(), "array");
    assert_eq!(PropertyKind::Object.name(), "object");
    assert_eq!(PropertyKind::Other("x-secret".into()).name(), "x-secret");
}

#[test]
fn unknown_kind_passes_through() {
    let kind = PropertyKind::from("number".to_string());
    assert_eq!(kind, PropertyKind::Other("number".into()));
    assert_eq!(String::from(kind), "number");
}

#[test]
fn default_kind_is_object() {
    assert_eq!(PropertyKind::default(), PropertyKind::Object);
}

// ── Serde wire shape ─────────────────────────────────────────────

#[test]
fn deserializes_template_schema_json() {
    let raw = r#"{
        "type": "object",
        "order": ["general", "scaling"],
        "properties": {
            "general": {
                "type": "object",
                "order": ["image", "version"],
                "properties": {
                    "image": {"type": "string", "title": "Image", "required": true, "minLength": 1},
                    "version": {"type": "string", "enum": ["1.0", "2.0"]}
                }
            },
            "scaling": {
                "type": "object",
                "properties": {
                    "replicas": {"type": "integer", "minimum": 1, "maximum": 9, "multipleOf": 1}
                }
            },
            "config": {"type": "string", "fileExtension": "yaml"}
        }
    }"#;

    let schema: Property = serde_json::from_str(raw).unwrap();
    assert_eq!(schema.kind, PropertyKind::Object);
    assert_eq!(schema.order, vec!["general".to_string(), "scaling".to_string()]);
    assert_eq!(schema.properties.len(), 3);

    let image = &schema.properties["general"].properties["image"];
    assert_eq!(image.kind, PropertyKind::String);
    assert_eq!(image.title.as_deref(), Some("Image"));
    assert!(image.required);
    assert_eq!(image.min_length, Some(1));

    let version = &schema.properties["general"].properties["version"];
    assert_eq!(version.enum_values, vec![json!("1.0"), json!("2.0")]);

    let replicas = &schema.properties["scaling"].properties["replicas"];
    assert_eq!(replicas.minimum, Some(1.0));
    assert_eq!(replicas.maximum, Some(9.0));
    assert_eq!(replicas.multiple_of, Some(1.0));

    assert_eq!(
        schema.properties["config"].file_extension.as_deref(),
        Some("yaml")
    );
}

#[test]
fn serializes_with_camel_case_keys() {
    let mut p = Property::string().titled("Config");
    p.file_extension = Some("json".into());
    p.min_length = Some(2);
    p.max_length = Some(64);

    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["type"], "string");
    assert_eq!(json["title"], "Config");
    assert_eq!(json["fileExtension"], "json");
    assert_eq!(json["minLength"], 2);
    assert_eq!(json["maxLength"], 64);
    // absent members are omitted, not null
    assert!(json.get("items").is_none());
    assert!(json.get("minimum").is_none());
}

#[test]
fn serde_roundtrip() {
    let original = Property::object([
        ("tags", Property::array(Property::string())),
        ("env", Property::map()),
    ])
    .ordered(["env", "tags"]);

    let json = serde_json::to_string(&original).unwrap();
    let parsed: Property = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn missing_type_defaults_to_object() {
    let p: Property = serde_json::from_str(r#"{"properties": {"a": {"type": "string"}}}"#).unwrap();
    assert_eq!(p.kind, PropertyKind::Object);
}

#[test]
fn unknown_type_survives_roundtrip() {
    let p: Property = serde_json::from_str(r#"{"type": "x-secret"}"#).unwrap();
    assert_eq!(p.kind, PropertyKind::Other("x-secret".into()));
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["type"], "x-secret");
}
