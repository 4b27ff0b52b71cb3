//! Validation outcome types.
//!
//! Every validation attempt produces exactly one `ValidationOutcome`:
//! `Accepted` carrying the typed, immutable record, or `Rejected` carrying
//! a diagnostic. Malformed input never raises; it rejects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Category of rejection for better organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// Input text is not well-formed JSON.
    Parse,
    /// JSON is well-formed but a required field is missing or mistyped.
    Schema,
    /// Fields are present and typed but fail a declared rule.
    Semantic,
}

impl RejectionKind {
    /// Get a human-readable name for the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionKind::Parse => "parse",
            RejectionKind::Schema => "schema",
            RejectionKind::Semantic => "semantic",
        }
    }
}

impl std::fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single rejection: kind plus human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// Category of the rejection.
    pub kind: RejectionKind,

    /// Diagnostic message suitable for corrective feedback.
    pub reason: String,
}

impl Rejection {
    /// Create a parse rejection.
    pub fn parse(reason: impl Into<String>) -> Self {
        Self {
            kind: RejectionKind::Parse,
            reason: reason.into(),
        }
    }

    /// Create a schema rejection.
    pub fn schema(reason: impl Into<String>) -> Self {
        Self {
            kind: RejectionKind::Schema,
            reason: reason.into(),
        }
    }

    /// Create a semantic rejection.
    pub fn semantic(reason: impl Into<String>) -> Self {
        Self {
            kind: RejectionKind::Semantic,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason)
    }
}

/// One validated record, created only by a successful validation.
///
/// Immutable after construction; holds exactly the fields the schema
/// declared, with typed accessors for each constraint kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredResult {
    schema: String,
    fields: Map<String, Value>,
}

impl StructuredResult {
    pub(crate) fn new(schema: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            schema: schema.into(),
            fields,
        }
    }

    /// Name of the schema this record was validated against.
    pub fn schema_name(&self) -> &str {
        &self.schema
    }

    /// Raw value of a field, if declared.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// String field value.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name)?.as_str()
    }

    /// Number field value.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.fields.get(name)?.as_f64()
    }

    /// Integer field value.
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.fields.get(name)?.as_i64()
    }

    /// Boolean field value.
    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.fields.get(name)?.as_bool()
    }

    /// List-of-strings field value.
    pub fn list(&self, name: &str) -> Option<Vec<&str>> {
        let items = self.fields.get(name)?.as_array()?;
        Some(items.iter().filter_map(Value::as_str).collect())
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over field names and values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Tagged result of one validation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// Input satisfied the schema; carries the typed record.
    Accepted(StructuredResult),
    /// Input failed; carries the first violated rule.
    Rejected(Rejection),
}

impl ValidationOutcome {
    /// Whether the attempt was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted(_))
    }

    /// Whether the attempt was rejected.
    pub fn is_rejected(&self) -> bool {
        matches!(self, ValidationOutcome::Rejected(_))
    }

    /// The rejection, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ValidationOutcome::Accepted(_) => None,
            ValidationOutcome::Rejected(rejection) => Some(rejection),
        }
    }

    /// Convert into a standard `Result` for `?`-style composition.
    pub fn into_result(self) -> std::result::Result<StructuredResult, Rejection> {
        match self {
            ValidationOutcome::Accepted(result) => Ok(result),
            ValidationOutcome::Rejected(rejection) => Err(rejection),
        }
    }
}
