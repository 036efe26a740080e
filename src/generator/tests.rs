//! Interface generation tests

use super::*;
use crate::error::Error;
use crate::schema::ConflictPolicy;
use crate::types::PrimitiveType;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

fn generate(entity: &str, samples: Vec<Value>) -> GeneratedInterfaces {
    InterfaceGenerator::new(entity)
        .with_variations(samples)
        .generate()
        .unwrap()
}

fn type_of(output: &GeneratedInterfaces, declaration: &str, field: &str) -> String {
    output
        .get(declaration)
        .unwrap_or_else(|| panic!("declaration '{declaration}' missing"))
        .field(field)
        .unwrap_or_else(|| panic!("field '{declaration}.{field}' missing"))
        .type_ref
        .to_string()
}

fn declaration_names(output: &GeneratedInterfaces) -> Vec<&str> {
    output
        .declarations
        .iter()
        .map(|d| d.name.as_str())
        .collect()
}

// ============================================================================
// Name Allocation
// ============================================================================

#[test]
fn test_allocate_base_name() {
    let mut names = NameAllocator::new();
    assert_eq!(names.allocate("Root", "child"), "Root_child");
    assert!(!names.reserve("Root_child"));
}

#[test]
fn test_allocate_suffixes_on_collision() {
    let mut names = NameAllocator::new();
    assert_eq!(names.allocate("Root", "child"), "Root_child");
    assert_eq!(names.allocate("Root", "child"), "Root_child_2");
    assert_eq!(names.allocate("Root", "child"), "Root_child_3");
}

#[test]
fn test_allocate_strips_optional_marker() {
    let mut names = NameAllocator::new();
    assert_eq!(names.allocate("Root", "maybe?"), "Root_maybe");
}

#[test]
fn test_allocate_skips_reserved_names() {
    let mut names = NameAllocator::new();
    assert!(names.reserve("Order_lines"));
    assert!(!names.reserve("Order_lines"));
    assert_eq!(names.allocate("Order", "lines"), "Order_lines_2");
}

#[test]
fn test_allocate_replaces_invalid_identifier_chars() {
    let mut names = NameAllocator::new();
    assert_eq!(names.allocate("User", "home-address"), "User_home_address");
    assert_eq!(names.allocate("User", "@meta"), "User__meta");
}

// ============================================================================
// Type References
// ============================================================================

#[test]
fn test_type_ref_display() {
    assert_eq!(TypeRef::Primitive(PrimitiveType::Boolean).to_string(), "boolean");
    assert_eq!(TypeRef::Named("User_address".into()).to_string(), "User_address");
    assert_eq!(
        TypeRef::array_of(TypeRef::Named("User_tags".into())).to_string(),
        "User_tags[]"
    );
    assert_eq!(TypeRef::array_of(TypeRef::Unknown).to_string(), "unknown[]");
    assert_eq!(
        TypeRef::array_of(TypeRef::Union(vec![
            TypeRef::Primitive(PrimitiveType::Number),
            TypeRef::Primitive(PrimitiveType::String),
        ]))
        .to_string(),
        "(number | string)[]"
    );
}

#[test_case("first_name", "first_name?: string;" ; "identifier")]
#[test_case("$ref", "$ref?: string;" ; "dollar identifier")]
#[test_case("first-name", "\"first-name\"?: string;" ; "dash")]
#[test_case("@id", "\"@id\"?: string;" ; "at sign")]
#[test_case("2fa", "\"2fa\"?: string;" ; "leading digit")]
#[test_case("say \"hi\"", r#""say \"hi\""?: string;"# ; "embedded quote")]
fn test_field_names_are_quoted_when_needed(name: &str, expected: &str) {
    let field = SchemaField {
        name: name.to_string(),
        optional: true,
        type_ref: TypeRef::Primitive(PrimitiveType::String),
    };
    assert_eq!(field.to_string(), expected);
}

#[test]
fn test_non_identifier_keys_render_valid_typescript() {
    let output = generate(
        "Person",
        vec![json!({"first-name": "A", "home-address": {"zip": "1"}})],
    );

    assert_eq!(
        output.render(),
        "// Generated by merged-interfaces\n\n\
         export interface Person_home_address {\n  zip: string;\n}\n\n\
         export interface Person {\n  \"first-name\": string;\n  \
         \"home-address\": Person_home_address;\n}\n"
    );
}

// ============================================================================
// Generation
// ============================================================================

#[test]
fn test_generate_requires_samples() {
    let err = InterfaceGenerator::new("User").generate().unwrap_err();
    assert!(matches!(err, Error::NoSampleData { ref entity } if entity == "User"));
}

#[test]
fn test_optional_field_rendering() {
    let output = generate("E", vec![json!({"a": 1}), json!({"a": 1, "b": "x"})]);

    assert_eq!(
        output.render(),
        "// Generated by merged-interfaces\n\nexport interface E {\n  a: number;\n  b?: string;\n}\n"
    );
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_nested_declarations_precede_root() {
    let output = generate("User", vec![json!({"id": 1, "address": {"city": "Oslo"}})]);

    assert_eq!(
        output.render(),
        "// Generated by merged-interfaces\n\n\
         export interface User_address {\n  city: string;\n}\n\n\
         export interface User {\n  id: number;\n  address: User_address;\n}\n"
    );
}

#[test]
fn test_identical_nested_objects_share_one_declaration() {
    let output = generate(
        "Root",
        vec![json!({
            "home": {"street": "Main St", "zip": 1234},
            "work": {"street": "Market St", "zip": 5678}
        })],
    );

    assert_eq!(declaration_names(&output), vec!["Root_home", "Root"]);
    assert_eq!(type_of(&output, "Root", "home"), "Root_home");
    assert_eq!(type_of(&output, "Root", "work"), "Root_home");
}

#[test]
fn test_same_field_names_with_different_nested_shapes_do_not_share() {
    let output = generate(
        "Root",
        vec![json!({
            "from": {"point": {"lat": 1.0, "lng": 2.0}},
            "to": {"point": {"x": 1, "y": 2}}
        })],
    );

    assert_ne!(type_of(&output, "Root", "from"), type_of(&output, "Root", "to"));
}

#[test]
fn test_array_filled_in_one_sample() {
    let output = generate("E", vec![json!({"items": []}), json!({"items": [{"x": 1}]})]);

    assert_eq!(type_of(&output, "E", "items"), "E_items[]");
    assert_eq!(type_of(&output, "E_items", "x"), "number");
    assert!(!output.root().unwrap().field("items").unwrap().optional);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_array_empty_in_every_sample() {
    let output = generate("E", vec![json!({"items": []}), json!({"items": []})]);

    assert_eq!(type_of(&output, "E", "items"), "unknown[]");
    assert_eq!(output.diagnostics.len(), 1);

    let diagnostic = &output.diagnostics[0];
    assert_eq!(diagnostic.kind, DiagnosticKind::EmptyArray);
    assert_eq!(diagnostic.path, "E.items");
    assert!(diagnostic.to_string().contains("Generated type will be 'unknown[]'"));
}

#[test]
fn test_heterogeneous_primitive_array() {
    let output = generate("E", vec![json!({"v": [1]}), json!({"v": ["a"]})]);
    assert_eq!(type_of(&output, "E", "v"), "(number | string)[]");
}

#[test]
fn test_homogeneous_primitive_array() {
    let output = generate("E", vec![json!({"tags": ["a", "b"]})]);
    assert_eq!(type_of(&output, "E", "tags"), "string[]");
}

#[test]
fn test_array_elements_are_merged_into_one_declaration() {
    let output = generate(
        "Order",
        vec![json!({"lines": [{"sku": "a", "qty": 1}, {"sku": "b", "note": "gift"}]})],
    );

    let lines = output.get("Order_lines").unwrap();
    assert_eq!(
        lines.render(),
        "export interface Order_lines {\n  sku: string;\n  qty?: number;\n  note?: string;\n}\n"
    );
}

#[test]
fn test_arrays_of_objects_get_one_declaration_per_occurrence() {
    let output = generate("E", vec![json!({"a": [{"x": 1}], "b": [{"x": 1}]})]);
    assert_eq!(declaration_names(&output), vec!["E_a", "E_b", "E"]);
}

#[test]
fn test_nested_names_use_enclosing_declaration() {
    let output = generate("E", vec![json!({"orders": [{"lines": [{"sku": "x"}]}]})]);

    assert_eq!(
        declaration_names(&output),
        vec!["E_orders_lines", "E_orders", "E"]
    );
    assert_eq!(type_of(&output, "E_orders", "lines"), "E_orders_lines[]");
}

#[test]
fn test_object_inside_array_reuses_matching_declaration() {
    let output = generate(
        "E",
        vec![json!({"home": {"x": 1}, "items": [{"loc": {"x": 2}}]})],
    );
    assert_eq!(type_of(&output, "E_items", "loc"), "E_home");
}

#[test]
fn test_name_collision_between_paths() {
    let output = generate("Root", vec![json!({"a": {"b": {"c": 1}}, "a_b": {"d": "x"}})]);

    assert_eq!(
        declaration_names(&output),
        vec!["Root_a_b", "Root_a", "Root_a_b_2", "Root"]
    );
    assert_eq!(type_of(&output, "Root", "a_b"), "Root_a_b_2");
}

#[test]
fn test_empty_nested_object() {
    let output = generate("E", vec![json!({"meta": {}})]);
    assert_eq!(
        output.get("E_meta").unwrap().render(),
        "export interface E_meta {\n}\n"
    );
}

#[test]
fn test_null_field_renders_null() {
    let output = generate("E", vec![json!({"parent": null})]);
    assert_eq!(type_of(&output, "E", "parent"), "null");
}

#[test]
fn test_non_object_variation_is_diagnosed() {
    let output = generate("E", vec![json!({"a": 1}), json!([1, 2])]);

    assert!(output.root().unwrap().field("a").unwrap().optional);
    assert_eq!(
        output.diagnostics[0].kind,
        DiagnosticKind::NonObjectSample { index: 1 }
    );
    assert_eq!(output.diagnostics[0].path, "E[1]");
}

#[test]
fn test_generation_is_idempotent() {
    let generator = InterfaceGenerator::new("Shop").with_variations(vec![
        json!({"id": 1, "owner": {"name": "a"}, "items": [{"price": 1.5}], "tags": []}),
        json!({"id": 2, "items": [{"price": 2, "discount": 0.1}], "tags": []}),
    ]);

    let first = generator.generate().unwrap();
    let second = generator.generate().unwrap();
    assert_eq!(first.render(), second.render());
    assert_eq!(first.diagnostics.len(), second.diagnostics.len());
}

#[test]
fn test_add_variation() {
    let mut generator = InterfaceGenerator::new("E");
    generator.add_variation(json!({"a": 1}));
    generator.add_variation(json!({"b": true}));
    assert_eq!(generator.variation_count(), 2);

    let output = generator.generate().unwrap();
    assert_eq!(type_of(&output, "E", "a"), "number");
    assert!(output.root().unwrap().field("b").unwrap().optional);
}

#[test]
fn test_custom_and_empty_header() {
    let generator = InterfaceGenerator::new("E").with_variations(vec![json!({"a": 1})]);

    let custom = generator
        .clone()
        .with_options(GeneratorOptions::new().with_header("/* fixture */"))
        .generate_text()
        .unwrap();
    assert!(custom.starts_with("/* fixture */\n\nexport interface E {"));

    let bare = generator
        .with_options(GeneratorOptions::new().with_header(""))
        .generate_text()
        .unwrap();
    assert_eq!(bare, "export interface E {\n  a: number;\n}\n");
}

#[test]
fn test_reject_policy_surfaces_conflicts() {
    let err = InterfaceGenerator::new("User")
        .with_options(GeneratorOptions::new().with_conflict_policy(ConflictPolicy::Reject))
        .with_variations(vec![json!({"address": {"city": "Oslo"}}), json!({"address": 42})])
        .generate()
        .unwrap_err();

    assert!(matches!(err, Error::ConflictingShape { ref path, .. } if path == "User.address"));
}

#[test]
fn test_json_output() {
    let output = generate("E", vec![json!({"items": [], "owner": {"id": 1}})]);
    let json: Value = serde_json::from_str(&output.to_json_pretty().unwrap()).unwrap();

    assert_eq!(json["entity"], "E");
    assert_eq!(json["declarations"][0]["name"], "E_owner");
    assert_eq!(json["declarations"][1]["fields"][1]["type"]["kind"], "named");
    assert_eq!(json["declarations"][1]["fields"][1]["type"]["type"], "E_owner");
    assert_eq!(json["diagnostics"][0]["kind"], "empty_array");
    assert_eq!(json["diagnostics"][0]["path"], "E.items");
}
