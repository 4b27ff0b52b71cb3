//! Validation of untrusted model output.
//!
//! - `fence` normalizes fenced markdown responses
//! - `outcome` defines the tagged accept/reject result types
//! - `validator` checks text against a declared schema

pub mod fence;
pub mod outcome;
pub mod validator;

pub use fence::strip_code_fence;
pub use outcome::{Rejection, RejectionKind, StructuredResult, ValidationOutcome};
pub use validator::GuardrailValidator;
