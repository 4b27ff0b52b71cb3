//! The guardrail validator.
//!
//! Decides whether model-generated text satisfies a declared schema without
//! executing or trusting the content. Pure function of input plus schema:
//! no side effects, and every failure mode is a `Rejected` outcome rather
//! than an error.
//!
//! Rule evaluation order is fixed: fields are checked in declaration order,
//! and within a field the type check precedes the constraint check. The
//! first violated rule determines the rejection reason.

use serde_json::{Map, Value};

use crate::schema::{FieldConstraint, FieldSpec, Schema};
use crate::validation::fence::strip_code_fence;
use crate::validation::outcome::{Rejection, StructuredResult, ValidationOutcome};

/// Validates untrusted model output against one schema.
pub struct GuardrailValidator {
    schema: Schema,
}

impl GuardrailValidator {
    /// Create a validator for the given schema.
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// The schema this validator checks against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validate raw model output.
    ///
    /// Steps: strip any surrounding code fence, parse as JSON, require a
    /// top-level object, then check each declared field for presence, type,
    /// and constraint. Unknown extra fields are ignored.
    pub fn validate(&self, raw_text: &str) -> ValidationOutcome {
        let normalized = strip_code_fence(raw_text);

        let value: Value = match serde_json::from_str(normalized) {
            Ok(value) => value,
            Err(e) => {
                return ValidationOutcome::Rejected(Rejection::parse(format!("parse error: {}", e)));
            }
        };

        let Value::Object(object) = value else {
            return ValidationOutcome::Rejected(Rejection::schema(format!(
                "schema violation: expected a JSON object, got {}",
                json_type_name(&value)
            )));
        };

        let mut fields = Map::new();
        for spec in self.schema.fields() {
            let Some(value) = object.get(&spec.name) else {
                return ValidationOutcome::Rejected(Rejection::schema(format!(
                    "schema violation: missing field '{}'",
                    spec.name
                )));
            };

            if let Err(rejection) = check_field(spec, value) {
                return ValidationOutcome::Rejected(rejection);
            }

            fields.insert(spec.name.clone(), value.clone());
        }

        ValidationOutcome::Accepted(StructuredResult::new(self.schema.name(), fields))
    }
}

/// Check one field value against its spec: type first, then constraint.
fn check_field(spec: &FieldSpec, value: &Value) -> Result<(), Rejection> {
    let mistyped = || {
        Rejection::schema(format!(
            "schema violation: field '{}' must be a {}, got {}",
            spec.name,
            spec.constraint.type_name(),
            json_type_name(value)
        ))
    };

    match &spec.constraint {
        FieldConstraint::Text { min_len } => {
            let text = value.as_str().ok_or_else(mistyped)?;
            let len = text.trim().chars().count();
            if len < *min_len {
                if *min_len == 1 {
                    return Err(Rejection::semantic(format!(
                        "field '{}' must not be empty",
                        spec.name
                    )));
                }
                return Err(Rejection::semantic(format!(
                    "field '{}' must be at least {} characters, got {}",
                    spec.name, min_len, len
                )));
            }
        }
        FieldConstraint::Enumerated { allowed } => {
            let text = value.as_str().ok_or_else(mistyped)?;
            if !allowed.iter().any(|v| v == text) {
                return Err(Rejection::semantic(format!(
                    "field '{}' must be one of [{}], got '{}'",
                    spec.name,
                    allowed.join(", "),
                    text
                )));
            }
        }
        FieldConstraint::Number { min, max } => {
            let number = value.as_f64().ok_or_else(mistyped)?;
            if number < *min || number > *max {
                return Err(Rejection::semantic(format!(
                    "field '{}' must be between {} and {}, got {}",
                    spec.name, min, max, number
                )));
            }
        }
        FieldConstraint::Integer { min, max } => {
            let integer = value.as_i64().ok_or_else(mistyped)?;
            if integer < *min || integer > *max {
                return Err(Rejection::semantic(format!(
                    "field '{}' must be between {} and {}, got {}",
                    spec.name, min, max, integer
                )));
            }
        }
        FieldConstraint::Boolean => {
            value.as_bool().ok_or_else(mistyped)?;
        }
        FieldConstraint::TextList { min_items } => {
            let items = value.as_array().ok_or_else(mistyped)?;
            if items.iter().any(|item| !item.is_string()) {
                return Err(mistyped());
            }
            if items.len() < *min_items {
                return Err(Rejection::semantic(format!(
                    "field '{}' must have at least {} items, got {}",
                    spec.name, min_items, items.len()
                )));
            }
        }
    }

    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
