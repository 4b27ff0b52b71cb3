//! Corrective feedback for rejected model output.
//!
//! When validation rejects an attempt, the caller re-invokes the model and
//! needs actionable feedback the model can use to fix its output. This
//! module records rejection history and renders it into a prompt fragment
//! alongside the expected format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::Schema;
use crate::validation::outcome::{Rejection, RejectionKind};

/// One rejected attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// 1-based attempt index.
    pub attempt: u32,

    /// Category of the rejection.
    pub kind: RejectionKind,

    /// The rejection reason.
    pub reason: String,

    /// When the rejection was recorded.
    pub timestamp: DateTime<Utc>,
}

/// Accumulates rejections across attempts and renders corrective prompts.
#[derive(Debug, Clone, Default)]
pub struct CorrectiveFeedback {
    records: Vec<AttemptRecord>,
}

impl CorrectiveFeedback {
    /// Create empty feedback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rejected attempt.
    pub fn record(&mut self, attempt: u32, rejection: &Rejection) {
        self.records.push(AttemptRecord {
            attempt,
            kind: rejection.kind,
            reason: rejection.reason.clone(),
            timestamp: Utc::now(),
        });
    }

    /// Whether any rejection has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of recorded rejections.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Recorded attempts, oldest first.
    pub fn records(&self) -> &[AttemptRecord] {
        &self.records
    }

    /// Render a prompt fragment describing what went wrong and the expected
    /// format. Empty string when nothing has been recorded.
    ///
    /// With multiple rejections the fragment opens with a one-line-per-attempt
    /// summary and then details the most recent rejection, so the model fixes
    /// the latest problem first.
    pub fn render(&self, schema: &Schema) -> String {
        let Some(latest) = self.records.last() else {
            return String::new();
        };

        let mut output = String::new();
        output.push_str("## Previous Attempt Failures\n\n");

        if self.records.len() > 1 {
            output.push_str("**Summary:**\n");
            for record in &self.records {
                output.push_str(&format!(
                    "- Attempt {}: {} rejection\n",
                    record.attempt, record.kind
                ));
            }
            output.push('\n');
        }

        output.push_str("**Most recent rejection (fix this first):**\n\n");
        output.push_str(&format!("- {}\n\n", latest.reason));

        output.push_str(&format!(
            "## Expected Format\n\nRespond with a single JSON object ({}) containing:\n",
            schema.name()
        ));
        for spec in schema.fields() {
            output.push_str(&format!(
                "- `{}`: {}\n",
                spec.name,
                spec.constraint.describe()
            ));
        }

        output
    }
}
