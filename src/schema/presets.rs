//! Preset schemas for the common guardrail record shapes.
//!
//! Two shapes recur across guardrail pipelines: a content-policy verdict
//! produced by a policy-enforcer model, and a research summary produced by
//! a research agent. Both are defined here so callers don't have to rebuild
//! them by hand.

use super::{FieldConstraint, FieldSpec, Schema};

/// Schema for a content-policy compliance verdict.
///
/// Fields:
/// - `compliance_status`: "compliant" or "non-compliant"
/// - `evaluation_summary`: non-empty explanation of the verdict
/// - `triggered_policies`: list of violated policy directives (may be empty)
pub fn policy_evaluation() -> Schema {
    Schema::from_parts(
        "policy_evaluation",
        vec![
            FieldSpec::new(
                "compliance_status",
                FieldConstraint::Enumerated {
                    allowed: vec!["compliant".to_string(), "non-compliant".to_string()],
                },
            ),
            FieldSpec::new("evaluation_summary", FieldConstraint::Text { min_len: 1 }),
            FieldSpec::new("triggered_policies", FieldConstraint::TextList { min_items: 0 }),
        ],
    )
}

/// Schema for a research summary.
///
/// Fields:
/// - `title`: at least 5 characters after trimming
/// - `key_findings`: at least 3 findings
/// - `confidence_score`: number in [0.0, 1.0]
pub fn research_summary() -> Schema {
    Schema::from_parts(
        "research_summary",
        vec![
            FieldSpec::new("title", FieldConstraint::Text { min_len: 5 }),
            FieldSpec::new("key_findings", FieldConstraint::TextList { min_items: 3 }),
            FieldSpec::new(
                "confidence_score",
                FieldConstraint::Number { min: 0.0, max: 1.0 },
            ),
        ],
    )
}
