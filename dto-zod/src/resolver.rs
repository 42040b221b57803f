//! Field type resolution.
//!
//! Maps a single field's type description to a zod expression plus the
//! imports that expression needs. Resolution is pure: imports are returned
//! as values and accumulated by the caller.
//!
//! # Type Mappings
//!
//! | Type name (case-insensitive) | Zod expression | Import |
//! |------------------------------|----------------|--------|
//! | `long`, `integer`, `int`, `double`, `float` | `z.number()` | |
//! | `string` | `z.string()` | |
//! | `boolean` | `z.boolean()` | |
//! | `uuid` | `z.string().uuid()` | |
//! | `localdate` | `zDateOnly` | helpers module |
//! | `localtime` | `zTimeOnly` | helpers module |
//! | other names containing `date`/`time` | `z.date()` | |
//! | `dayofweek` | `zDayOfWeek` | helpers module |
//! | collection of `T` | `z.array(T)` | imports of `T` |
//! | anything else, `Foo` | `FooSchema` | `./FooSchema` |

use crate::descriptor::FieldDescriptor;
use crate::error::ResolveResult;
use crate::helpers::{DATE_ONLY, DAY_OF_WEEK, TIME_ONLY};
use crate::imports::ImportRequirement;
use crate::options::ResolverOptions;
use crate::shape::{EnumeratedKind, PrimitiveKind, SchemaShape, TemporalKind};

/// Symbol the validation library is imported as.
pub const CORE_VALIDATOR: &str = "z";

/// A resolved field expression and the imports it requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaExpression {
    /// TypeScript expression producing the field's validator.
    pub expression: String,

    /// Imports the expression depends on.
    pub imports: Vec<ImportRequirement>,
}

impl SchemaExpression {
    /// An expression with no imports.
    pub fn inline(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            imports: Vec::new(),
        }
    }

    /// An expression with a single import.
    pub fn imported(expression: impl Into<String>, import: ImportRequirement) -> Self {
        Self {
            expression: expression.into(),
            imports: vec![import],
        }
    }
}

/// Resolves field descriptors to zod expressions.
#[derive(Debug, Clone, Default)]
pub struct TypeResolver {
    options: ResolverOptions,
}

impl TypeResolver {
    /// Create a resolver with the given options.
    pub fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Resolve a field's type to a zod expression.
    pub fn resolve(&self, field: &FieldDescriptor) -> ResolveResult<SchemaExpression> {
        let shape = SchemaShape::classify(field, &self.options)?;
        Ok(self.render(&shape, None))
    }

    /// Resolve a field that belongs to the DTO named `owner`.
    ///
    /// References back to `owner` are wrapped in `z.lazy` and import nothing.
    pub fn resolve_for(
        &self,
        owner: &str,
        field: &FieldDescriptor,
    ) -> ResolveResult<SchemaExpression> {
        let shape = SchemaShape::classify(field, &self.options)?;
        Ok(self.render(&shape, Some(owner)))
    }

    fn render(&self, shape: &SchemaShape, owner: Option<&str>) -> SchemaExpression {
        match shape {
            SchemaShape::Primitive(kind) => SchemaExpression::inline(primitive_expression(*kind)),
            SchemaShape::Temporal(TemporalKind::DateOnly) => self.helper(DATE_ONLY),
            SchemaShape::Temporal(TemporalKind::TimeOnly) => self.helper(TIME_ONLY),
            SchemaShape::Temporal(TemporalKind::Timestamp) => SchemaExpression::inline("z.date()"),
            SchemaShape::Enumerated(EnumeratedKind::DayOfWeek) => self.helper(DAY_OF_WEEK),
            SchemaShape::Override(expression) => SchemaExpression::inline(expression.clone()),
            SchemaShape::Collection(element) => {
                let element = self.render(element, owner);
                SchemaExpression {
                    expression: format!("z.array({})", element.expression),
                    imports: element.imports,
                }
            }
            SchemaShape::Reference(name) => {
                let schema_name = self.options.schema_name(name);
                if owner == Some(name.as_str()) {
                    // Typed callback keeps the initializer from referencing its own type.
                    SchemaExpression::inline(format!(
                        "z.lazy((): z.ZodTypeAny => {})",
                        schema_name
                    ))
                } else {
                    let import = ImportRequirement::sibling_schema(&schema_name);
                    SchemaExpression::imported(schema_name, import)
                }
            }
        }
    }

    fn helper(&self, symbol: &str) -> SchemaExpression {
        SchemaExpression::imported(
            symbol,
            ImportRequirement::new(symbol, self.options.helpers_module.as_str()),
        )
    }
}

fn primitive_expression(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Number => "z.number()",
        PrimitiveKind::String => "z.string()",
        PrimitiveKind::Boolean => "z.boolean()",
        PrimitiveKind::Uuid => "z.string().uuid()",
    }
}
