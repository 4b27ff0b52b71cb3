//! Guardr - structured-output guardrails for LLM pipelines
//!
//! Guardr sits between an orchestration pattern and an untrusted language
//! model: it screens user input, validates model output against a
//! declarative schema, and wraps the producing call in a bounded
//! exponential-backoff retry loop that feeds corrective feedback back to
//! the model.
//!
//! The model call itself is an external collaborator reached through the
//! [`retry::Producer`] trait; this crate performs no network I/O.

pub mod error;
pub mod feedback;
pub mod moderation;
pub mod retry;
pub mod schema;
pub mod validation;

pub use error::{GuardrError, Result};
pub use feedback::{AttemptRecord, CorrectiveFeedback};
pub use moderation::{InputModerator, ModerationVerdict};
pub use retry::{Producer, RetryPolicy, run_with_retry};
pub use schema::{FieldConstraint, FieldSpec, Schema, SchemaBuilder};
pub use validation::{
    GuardrailValidator, Rejection, RejectionKind, StructuredResult, ValidationOutcome,
    strip_code_fence,
};
