//! Schema shapes.
//!
//! A field's type is classified once into a [`SchemaShape`]; rendering then
//! pattern-matches on the shape instead of comparing type-name strings.

use crate::descriptor::{
    extract_element_name, is_collection_name, is_identifier, simple_name, FieldDescriptor,
};
use crate::error::{ResolveResult, UnsupportedTypeError};
use crate::options::ResolverOptions;

/// Scalar validators built into zod.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// `long`, `integer`, `int`, `double`, `float`
    Number,
    /// `string`
    String,
    /// `boolean`
    Boolean,
    /// `uuid`
    Uuid,
}

/// Date and time shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalKind {
    /// A calendar date without time of day or zone.
    DateOnly,
    /// A time of day without date or zone.
    TimeOnly,
    /// Any other date/time-bearing type.
    Timestamp,
}

/// Closed value domains backed by a shared helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumeratedKind {
    /// Monday through Sunday.
    DayOfWeek,
}

/// The resolved shape of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaShape {
    /// Built-in scalar validator.
    Primitive(PrimitiveKind),
    /// Date/time validator.
    Temporal(TemporalKind),
    /// Enumerated-domain helper.
    Enumerated(EnumeratedKind),
    /// Configured expression for a type name.
    Override(String),
    /// List of a non-collection element shape.
    Collection(Box<SchemaShape>),
    /// Another DTO's schema, by simple type name.
    Reference(String),
}

impl SchemaShape {
    /// Classify a field.
    pub fn classify(field: &FieldDescriptor, options: &ResolverOptions) -> ResolveResult<Self> {
        if let Some(expression) = options.override_for(field.simple_type_name()) {
            return Ok(SchemaShape::Override(expression.to_string()));
        }

        if field.is_collection() || is_collection_name(field.simple_type_name()) {
            let element = element_type_name(field)?;
            let element = Self::classify_element(&element, options)?;
            return Ok(SchemaShape::Collection(Box::new(element)));
        }

        Self::classify_scalar(field.simple_type_name(), options)
    }

    /// Classify a collection element. Collections are rejected here.
    fn classify_element(name: &str, options: &ResolverOptions) -> ResolveResult<Self> {
        if is_collection_name(name) {
            return Err(UnsupportedTypeError::recursive(name));
        }
        Self::classify_scalar(simple_name(name), options)
    }

    /// Classify a non-collection simple type name.
    fn classify_scalar(name: &str, options: &ResolverOptions) -> ResolveResult<Self> {
        if let Some(expression) = options.override_for(name) {
            return Ok(SchemaShape::Override(expression.to_string()));
        }

        let lower = name.to_lowercase();

        if lower.contains("date") || lower.contains("time") {
            let kind = match lower.as_str() {
                "localdate" => TemporalKind::DateOnly,
                "localtime" => TemporalKind::TimeOnly,
                _ => TemporalKind::Timestamp,
            };
            return Ok(SchemaShape::Temporal(kind));
        }

        let shape = match lower.as_str() {
            "long" | "integer" | "int" | "double" | "float" => {
                SchemaShape::Primitive(PrimitiveKind::Number)
            }
            "string" => SchemaShape::Primitive(PrimitiveKind::String),
            "boolean" => SchemaShape::Primitive(PrimitiveKind::Boolean),
            "uuid" => SchemaShape::Primitive(PrimitiveKind::Uuid),
            "dayofweek" => SchemaShape::Enumerated(EnumeratedKind::DayOfWeek),
            _ if is_identifier(name) => SchemaShape::Reference(name.to_string()),
            _ => {
                return Err(UnsupportedTypeError::InvalidTypeName {
                    name: name.to_string(),
                })
            }
        };

        Ok(shape)
    }
}

/// Element type name of a collection field.
fn element_type_name(field: &FieldDescriptor) -> ResolveResult<String> {
    if let Some(element) = field.element_type_name() {
        return Ok(element.trim().to_string());
    }

    if let Some(signature) = field.generic_signature() {
        return extract_element_name(signature);
    }

    Err(UnsupportedTypeError::MissingElementType {
        declared: field.declared_type_name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(field: FieldDescriptor) -> ResolveResult<SchemaShape> {
        SchemaShape::classify(&field, &ResolverOptions::default())
    }

    #[test]
    fn test_classify_primitives() {
        for name in ["Long", "Integer", "int", "Double", "float"] {
            assert_eq!(
                classify(FieldDescriptor::new("n", name)).unwrap(),
                SchemaShape::Primitive(PrimitiveKind::Number),
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_classify_temporal() {
        assert_eq!(
            classify(FieldDescriptor::new("d", "java.time.LocalDate")).unwrap(),
            SchemaShape::Temporal(TemporalKind::DateOnly)
        );
        assert_eq!(
            classify(FieldDescriptor::new("t", "LocalTime")).unwrap(),
            SchemaShape::Temporal(TemporalKind::TimeOnly)
        );
        assert_eq!(
            classify(FieldDescriptor::new("ts", "LocalDateTime")).unwrap(),
            SchemaShape::Temporal(TemporalKind::Timestamp)
        );
    }

    #[test]
    fn test_temporal_check_precedes_reference() {
        assert_eq!(
            classify(FieldDescriptor::new("ts", "ZonedDateTime")).unwrap(),
            SchemaShape::Temporal(TemporalKind::Timestamp)
        );
    }

    #[test]
    fn test_classify_collection_of_dates() {
        assert_eq!(
            classify(FieldDescriptor::collection("days", "List", "LocalDate")).unwrap(),
            SchemaShape::Collection(Box::new(SchemaShape::Temporal(TemporalKind::DateOnly)))
        );
    }

    #[test]
    fn test_classify_reference() {
        assert_eq!(
            classify(FieldDescriptor::new("address", "com.acme.Address")).unwrap(),
            SchemaShape::Reference("Address".to_string())
        );
    }

    #[test]
    fn test_classify_nested_collection_fails() {
        let err = classify(FieldDescriptor::collection("matrix", "List", "List")).unwrap_err();
        assert!(matches!(err, UnsupportedTypeError::RecursiveCollection { .. }));
    }

    #[test]
    fn test_classify_missing_element() {
        let err = classify(FieldDescriptor::new("items", "List")).unwrap_err();
        assert_eq!(
            err,
            UnsupportedTypeError::MissingElementType {
                declared: "List".to_string()
            }
        );
    }

    #[test]
    fn test_classify_generic_non_collection_uses_outer_name() {
        let shape = classify(FieldDescriptor::new("maybe", "Optional<String>")).unwrap();
        assert_eq!(shape, SchemaShape::Reference("Optional".to_string()));
    }

    #[test]
    fn test_classify_array_of_arrays_fails() {
        let err = classify(FieldDescriptor::new("grid", "int[][]")).unwrap_err();
        assert_eq!(err, UnsupportedTypeError::recursive("int[]"));
    }

    #[test]
    fn test_classify_invalid_name() {
        let err = classify(FieldDescriptor::new("weird", "Foo-Bar")).unwrap_err();
        assert!(matches!(err, UnsupportedTypeError::InvalidTypeName { .. }));
    }

    #[test]
    fn test_classify_non_ascii_name_is_invalid() {
        let err = classify(FieldDescriptor::new("x", "Foo²")).unwrap_err();
        assert_eq!(
            err,
            UnsupportedTypeError::InvalidTypeName {
                name: "Foo²".to_string()
            }
        );
    }

    #[test]
    fn test_classify_element_from_attached_signature() {
        let field = FieldDescriptor::new("tags", "List")
            .with_generic_signature("java.util.List<com.acme.Tag>");
        assert_eq!(
            classify(field).unwrap(),
            SchemaShape::Collection(Box::new(SchemaShape::Reference("Tag".to_string())))
        );
    }

    #[test]
    fn test_override_replaces_whole_collection() {
        let options = ResolverOptions::default().with_override("Set", "z.set(z.string())");
        assert_eq!(
            SchemaShape::classify(&FieldDescriptor::new("s", "java.util.Set<String>"), &options)
                .unwrap(),
            SchemaShape::Override("z.set(z.string())".to_string())
        );
    }

    #[test]
    fn test_override_wins() {
        let options = ResolverOptions::default().with_override("LocalDate", "z.string()");
        let shape =
            SchemaShape::classify(&FieldDescriptor::new("d", "LocalDate"), &options).unwrap();
        assert_eq!(shape, SchemaShape::Override("z.string()".to_string()));
    }
}
