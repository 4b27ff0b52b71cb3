//! Declarative output schemas.
//!
//! A `Schema` describes the shape a structured model response must take:
//! field names, types, enumerated values, numeric bounds, and minimum list
//! lengths. Checks are plain conditional logic over `serde_json` values;
//! no reflection is involved.
//!
//! Schemas are built once, validated at build time, and read-only afterward.
//! A malformed schema definition is a programmer error and fails `build()`;
//! it is never reported as a validation outcome.

pub mod presets;

use serde::{Deserialize, Serialize};

use crate::error::{GuardrError, Result};

/// Constraint applied to a single declared field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldConstraint {
    /// String with a minimum trimmed length (`min_len >= 1` means non-empty).
    Text { min_len: usize },

    /// String restricted to a declared set of values.
    Enumerated { allowed: Vec<String> },

    /// Floating-point number within an inclusive range.
    Number { min: f64, max: f64 },

    /// Integer within an inclusive range.
    Integer { min: i64, max: i64 },

    /// Boolean flag.
    Boolean,

    /// List of strings with a minimum cardinality.
    TextList { min_items: usize },
}

impl FieldConstraint {
    /// The JSON type this constraint expects, for rejection messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldConstraint::Text { .. } | FieldConstraint::Enumerated { .. } => "string",
            FieldConstraint::Number { .. } => "number",
            FieldConstraint::Integer { .. } => "integer",
            FieldConstraint::Boolean => "boolean",
            FieldConstraint::TextList { .. } => "list of strings",
        }
    }

    /// Human-readable description used in corrective feedback prompts.
    pub fn describe(&self) -> String {
        match self {
            FieldConstraint::Text { min_len: 0 } => "string".to_string(),
            FieldConstraint::Text { min_len: 1 } => "non-empty string".to_string(),
            FieldConstraint::Text { min_len } => {
                format!("string with at least {} characters", min_len)
            }
            FieldConstraint::Enumerated { allowed } => {
                format!("one of: {}", allowed.join(", "))
            }
            FieldConstraint::Number { min, max } => {
                format!("number between {} and {}", min, max)
            }
            FieldConstraint::Integer { min, max } => {
                format!("integer between {} and {}", min, max)
            }
            FieldConstraint::Boolean => "boolean".to_string(),
            FieldConstraint::TextList { min_items: 0 } => "list of strings".to_string(),
            FieldConstraint::TextList { min_items } => {
                format!("list of at least {} strings", min_items)
            }
        }
    }
}

/// A single declared field: name plus constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name as it appears in the JSON object.
    pub name: String,

    /// Constraint the field value must satisfy.
    pub constraint: FieldConstraint,
}

impl FieldSpec {
    /// Create a new field spec.
    pub fn new(name: impl Into<String>, constraint: FieldConstraint) -> Self {
        Self {
            name: name.into(),
            constraint,
        }
    }
}

/// A validated, read-only schema definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    name: String,
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Start building a schema with the given name.
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Schema name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared fields, in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    // Presets construct statically-known-valid schemas without a build() pass.
    pub(crate) fn from_parts(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// Builder for [`Schema`].
///
/// `build()` rejects empty schemas, duplicate field names, empty enum sets,
/// and inverted numeric ranges with `GuardrError::Schema`.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    name: String,
    fields: Vec<FieldSpec>,
}

impl SchemaBuilder {
    /// Add a field with an explicit constraint.
    pub fn field(mut self, name: impl Into<String>, constraint: FieldConstraint) -> Self {
        self.fields.push(FieldSpec::new(name, constraint));
        self
    }

    /// Add a string field with a minimum trimmed length.
    pub fn text(self, name: impl Into<String>, min_len: usize) -> Self {
        self.field(name, FieldConstraint::Text { min_len })
    }

    /// Add a string field restricted to the given values.
    pub fn enumerated(
        self,
        name: impl Into<String>,
        allowed: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.field(
            name,
            FieldConstraint::Enumerated {
                allowed: allowed.into_iter().map(|v| v.into()).collect(),
            },
        )
    }

    /// Add a number field with an inclusive range.
    pub fn number(self, name: impl Into<String>, min: f64, max: f64) -> Self {
        self.field(name, FieldConstraint::Number { min, max })
    }

    /// Add an integer field with an inclusive range.
    pub fn integer(self, name: impl Into<String>, min: i64, max: i64) -> Self {
        self.field(name, FieldConstraint::Integer { min, max })
    }

    /// Add a boolean field.
    pub fn boolean(self, name: impl Into<String>) -> Self {
        self.field(name, FieldConstraint::Boolean)
    }

    /// Add a list-of-strings field with a minimum cardinality.
    pub fn text_list(self, name: impl Into<String>, min_items: usize) -> Self {
        self.field(name, FieldConstraint::TextList { min_items })
    }

    /// Validate the definition and produce the schema.
    pub fn build(self) -> Result<Schema> {
        if self.fields.is_empty() {
            return Err(GuardrError::Schema(format!(
                "schema '{}' declares no fields",
                self.name
            )));
        }

        for (i, spec) in self.fields.iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(GuardrError::Schema(format!(
                    "schema '{}' has a field with an empty name",
                    self.name
                )));
            }

            if self.fields[..i].iter().any(|f| f.name == spec.name) {
                return Err(GuardrError::Schema(format!(
                    "duplicate field '{}'",
                    spec.name
                )));
            }

            match &spec.constraint {
                FieldConstraint::Enumerated { allowed } => {
                    if allowed.is_empty() {
                        return Err(GuardrError::Schema(format!(
                            "field '{}' declares an empty enum set",
                            spec.name
                        )));
                    }
                }
                FieldConstraint::Number { min, max } => {
                    if !(min <= max) {
                        return Err(GuardrError::Schema(format!(
                            "field '{}' has an inverted range ({} > {})",
                            spec.name, min, max
                        )));
                    }
                }
                FieldConstraint::Integer { min, max } => {
                    if min > max {
                        return Err(GuardrError::Schema(format!(
                            "field '{}' has an inverted range ({} > {})",
                            spec.name, min, max
                        )));
                    }
                }
                _ => {}
            }
        }

        Ok(Schema {
            name: self.name,
            fields: self.fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_basic() {
        let schema = Schema::builder("verdict")
            .text("summary", 1)
            .number("score", 0.0, 1.0)
            .build()
            .unwrap();

        assert_eq!(schema.name(), "verdict");
        assert_eq!(schema.fields().len(), 2);
        assert_eq!(schema.fields()[0].name, "summary");
    }

    #[test]
    fn test_field_lookup() {
        let schema = Schema::builder("verdict")
            .boolean("approved")
            .build()
            .unwrap();

        assert!(schema.field("approved").is_some());
        assert!(schema.field("missing").is_none());
    }

    #[test]
    fn test_build_rejects_empty_schema() {
        let err = Schema::builder("empty").build().unwrap_err();
        assert!(matches!(err, GuardrError::Schema(_)));
        assert!(err.to_string().contains("declares no fields"));
    }

    #[test]
    fn test_build_rejects_duplicate_field() {
        let err = Schema::builder("dup")
            .text("title", 1)
            .text("title", 5)
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("duplicate field 'title'"));
    }

    #[test]
    fn test_build_rejects_empty_field_name() {
        let err = Schema::builder("bad").text("  ", 1).build().unwrap_err();
        assert!(err.to_string().contains("empty name"));
    }

    #[test]
    fn test_build_rejects_empty_enum() {
        let err = Schema::builder("bad")
            .enumerated("status", Vec::<String>::new())
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("empty enum set"));
    }

    #[test]
    fn test_build_rejects_inverted_number_range() {
        let err = Schema::builder("bad")
            .number("score", 1.0, 0.0)
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("inverted range"));
    }

    #[test]
    fn test_build_rejects_inverted_integer_range() {
        let err = Schema::builder("bad")
            .integer("count", 10, 3)
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("inverted range"));
    }

    #[test]
    fn test_build_rejects_nan_number_bound() {
        let err = Schema::builder("bad")
            .number("score", f64::NAN, 1.0)
            .build()
            .unwrap_err();

        assert!(matches!(err, GuardrError::Schema(_)));
    }

    #[test]
    fn test_constraint_type_names() {
        assert_eq!(FieldConstraint::Text { min_len: 0 }.type_name(), "string");
        assert_eq!(
            FieldConstraint::Enumerated { allowed: vec!["a".to_string()] }.type_name(),
            "string"
        );
        assert_eq!(
            FieldConstraint::Number { min: 0.0, max: 1.0 }.type_name(),
            "number"
        );
        assert_eq!(
            FieldConstraint::Integer { min: 0, max: 1 }.type_name(),
            "integer"
        );
        assert_eq!(FieldConstraint::Boolean.type_name(), "boolean");
        assert_eq!(
            FieldConstraint::TextList { min_items: 0 }.type_name(),
            "list of strings"
        );
    }

    #[test]
    fn test_constraint_describe() {
        assert_eq!(FieldConstraint::Text { min_len: 1 }.describe(), "non-empty string");
        assert_eq!(
            FieldConstraint::Text { min_len: 5 }.describe(),
            "string with at least 5 characters"
        );
        assert_eq!(
            FieldConstraint::Enumerated {
                allowed: vec!["compliant".to_string(), "non-compliant".to_string()]
            }
            .describe(),
            "one of: compliant, non-compliant"
        );
        assert_eq!(
            FieldConstraint::Number { min: 0.0, max: 1.0 }.describe(),
            "number between 0 and 1"
        );
        assert_eq!(
            FieldConstraint::TextList { min_items: 3 }.describe(),
            "list of at least 3 strings"
        );
    }

    #[test]
    fn test_schema_serialization_roundtrip() {
        let schema = Schema::builder("verdict")
            .enumerated("status", ["ok", "bad"])
            .text_list("notes", 2)
            .build()
            .unwrap();

        let json = serde_json::to_string(&schema).unwrap();
        let restored: Schema = serde_json::from_str(&json).unwrap();
        assert_eq!(schema, restored);
    }
}
