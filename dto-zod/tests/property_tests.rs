//! Property-based tests for dto-zod.
//!
//! Properties tested:
//! - Property 1: Primitive mapping ignores case
//! - Property 2: Collections wrap their element expression
//! - Property 3: Nested collections always fail
//! - Property 4: References import exactly their own schema
//! - Property 5: Import deduplication
//! - Property 6: Partial documents keep every mappable field
//! - Property 7: Generation is idempotent

use proptest::prelude::*;

use dto_zod::{
    generate_all, DtoDescriptor, FieldDescriptor, ImportRequirement, MemorySink,
    SchemaSynthesizer, TypeResolver, UnsupportedTypeError,
};

// =============================================================================
// Generators for property tests
// =============================================================================

/// Randomize the case of every character.
fn arb_case(name: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), name.len()).prop_map(move |upper| {
        name.chars()
            .zip(upper)
            .map(|(c, up)| {
                if up {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect()
    })
}

/// A simple type name paired with its expected expression.
fn arb_simple_type() -> impl Strategy<Value = (String, &'static str)> {
    prop_oneof![
        prop_oneof![
            arb_case("long"),
            arb_case("integer"),
            arb_case("int"),
            arb_case("double"),
            arb_case("float"),
        ]
        .prop_map(|n| (n, "z.number()")),
        arb_case("string").prop_map(|n| (n, "z.string()")),
        arb_case("boolean").prop_map(|n| (n, "z.boolean()")),
        arb_case("uuid").prop_map(|n| (n, "z.string().uuid()")),
    ]
}

/// A user-defined DTO name that does not collide with built-in names.
fn arb_dto_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}(Dto|Info|Record)".prop_filter("temporal names resolve as dates", |name| {
        let lower = name.to_lowercase();
        !lower.contains("date") && !lower.contains("time")
    })
}

/// A field name.
fn arb_field_name() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,12}"
}

/// A type name that always resolves.
fn arb_mappable_type() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_simple_type().prop_map(|(n, _)| n),
        Just("LocalDate".to_string()),
        Just("LocalTime".to_string()),
        Just("Instant".to_string()),
        Just("DayOfWeek".to_string()),
        Just("java.util.List<java.lang.String>".to_string()),
        arb_dto_name(),
    ]
}

fn resolver() -> TypeResolver {
    TypeResolver::default()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 1: Primitive mapping ignores case
    // =========================================================================

    #[test]
    fn prop_primitive_mapping_ignores_case((name, expected) in arb_simple_type()) {
        let expr = resolver().resolve(&FieldDescriptor::new("value", name)).unwrap();
        prop_assert_eq!(expr.expression, expected);
        prop_assert!(expr.imports.is_empty());
    }

    // =========================================================================
    // Property 2: Collections wrap their element expression
    // =========================================================================

    #[test]
    fn prop_collection_wraps_element(element in arb_mappable_type()) {
        prop_assume!(!element.contains('<'));

        let scalar = resolver().resolve(&FieldDescriptor::new("one", element.clone())).unwrap();
        let list = resolver()
            .resolve(&FieldDescriptor::collection("many", "List", element))
            .unwrap();

        prop_assert_eq!(list.expression, format!("z.array({})", scalar.expression));
        prop_assert_eq!(list.imports, scalar.imports);
    }

    // =========================================================================
    // Property 3: Nested collections always fail
    // =========================================================================

    #[test]
    fn prop_nested_collection_fails(
        outer in prop_oneof![Just("List"), Just("Set"), Just("java.util.ArrayList")],
        inner in prop_oneof![Just("List"), Just("java.util.Set"), Just("LinkedList")],
        element in arb_mappable_type(),
    ) {
        let signature = format!("{}<{}<{}>>", outer, inner, element);
        let err = resolver().resolve(&FieldDescriptor::new("nested", signature)).unwrap_err();
        let is_recursive = matches!(err, UnsupportedTypeError::RecursiveCollection { .. });
        prop_assert!(is_recursive);

        let err = resolver()
            .resolve(&FieldDescriptor::collection("nested", outer, inner))
            .unwrap_err();
        let is_recursive = matches!(err, UnsupportedTypeError::RecursiveCollection { .. });
        prop_assert!(is_recursive);
    }

    // =========================================================================
    // Property 4: References import exactly their own schema
    // =========================================================================

    #[test]
    fn prop_reference_imports_own_schema(name in arb_dto_name()) {
        let expr = resolver().resolve(&FieldDescriptor::new("other", name.clone())).unwrap();
        let schema = format!("{}Schema", name);

        prop_assert_eq!(&expr.expression, &schema);
        prop_assert_eq!(
            expr.imports,
            vec![ImportRequirement::new(schema.clone(), format!("./{}", schema))]
        );
    }

    // =========================================================================
    // Property 5: Import deduplication
    // =========================================================================

    #[test]
    fn prop_imports_are_unique(
        types in proptest::collection::vec(arb_mappable_type(), 0..12),
    ) {
        let mut dto = DtoDescriptor::new("Holder");
        for (i, ty) in types.iter().enumerate() {
            dto = dto.with_field(FieldDescriptor::new(format!("f{}", i), ty.clone()));
        }

        let doc = SchemaSynthesizer::default().synthesize(&dto);
        let import_lines: Vec<&str> = doc
            .content()
            .lines()
            .filter(|line| line.starts_with("import "))
            .collect();

        let mut unique = import_lines.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(unique.len(), import_lines.len());
        prop_assert_eq!(import_lines[0], "import { z } from 'zod';");
    }

    // =========================================================================
    // Property 6: Partial documents keep every mappable field
    // =========================================================================

    #[test]
    fn prop_partial_document_keeps_mappable_fields(
        names in proptest::collection::hash_set(arb_field_name(), 3..8),
        bad_index in 0usize..8,
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let bad_index = bad_index % names.len();

        let mut dto = DtoDescriptor::new("Partial");
        for (i, name) in names.iter().enumerate() {
            let ty = if i == bad_index { "List<List<String>>" } else { "String" };
            dto = dto.with_field(FieldDescriptor::new(name.clone(), ty));
        }

        let doc = SchemaSynthesizer::default().synthesize(&dto);

        prop_assert_eq!(doc.skipped().len(), 1);
        prop_assert_eq!(&doc.skipped()[0].field_name, &names[bad_index]);
        prop_assert_eq!(doc.fields().len(), names.len() - 1);
        for (i, name) in names.iter().enumerate() {
            let line = format!("  {}: z.string(),\n", name);
            prop_assert_eq!(doc.content().contains(&line), i != bad_index);
        }
    }

    // =========================================================================
    // Property 7: Generation is idempotent
    // =========================================================================

    #[test]
    fn prop_generation_is_idempotent(
        dto_names in proptest::collection::btree_set(arb_dto_name(), 1..5),
        types in proptest::collection::vec(arb_mappable_type(), 0..6),
    ) {
        let dtos: Vec<DtoDescriptor> = dto_names
            .iter()
            .map(|name| {
                types.iter().enumerate().fold(DtoDescriptor::new(name.clone()), |dto, (i, ty)| {
                    dto.with_field(FieldDescriptor::new(format!("f{}", i), ty.clone()))
                })
            })
            .collect();

        let synthesizer = SchemaSynthesizer::default();
        let mut first = MemorySink::new();
        let mut second = MemorySink::new();
        generate_all(&synthesizer, dtos.clone(), &mut first).unwrap();
        generate_all(&synthesizer, dtos, &mut second).unwrap();

        prop_assert_eq!(first.files(), second.files());
    }
}

// =============================================================================
// Example from the format description
// =============================================================================

#[test]
fn test_user_example_body() {
    let user = DtoDescriptor::new("User")
        .with_field(FieldDescriptor::new("id", "UUID"))
        .with_field(FieldDescriptor::new("name", "String"))
        .with_field(FieldDescriptor::new("birthDate", "LocalDate"))
        .with_field(FieldDescriptor::new("tags", "List<String>"));

    let doc = SchemaSynthesizer::default().synthesize(&user);
    let compact: String = doc.content().split_whitespace().collect();

    assert!(compact.contains(
        "id:z.string().uuid(),name:z.string(),birthDate:zDateOnly,tags:z.array(z.string()),"
    ));
    assert!(doc
        .imports()
        .contains(&ImportRequirement::new("zDateOnly", "../zod-mods")));
    assert_eq!(doc.imports().len(), 1);
    assert!(doc.content().contains("import { z } from 'zod';"));
}
