//! Bounded retry with exponential backoff.
//!
//! Composes an external producer (the model call) with a guardrail
//! validator. Each attempt is produce-then-validate; on rejection the loop
//! sleeps the current delay, doubles it, and retries with corrective
//! feedback until the attempt budget runs out.
//!
//! The budget covers validation failures only. A producer error is terminal
//! immediately: transport problems are the caller's concern, not something
//! a corrective prompt can fix.

use std::time::Duration;

use async_trait::async_trait;
use log::{info, warn};

use crate::error::{GuardrError, Result};
use crate::feedback::CorrectiveFeedback;
use crate::validation::outcome::{StructuredResult, ValidationOutcome};
use crate::validation::validator::GuardrailValidator;

/// External producer of raw model output.
///
/// One call per attempt. After a rejection the retry loop passes the
/// rendered corrective feedback so the producer can append it to its prompt.
#[async_trait]
pub trait Producer: Send {
    /// Produce one raw output. `feedback` is `None` on the first attempt.
    async fn produce(&mut self, feedback: Option<&str>) -> Result<String>;
}

/// Retry policy: attempt budget and backoff shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of produce-and-validate attempts.
    pub max_attempts: u32,

    /// Delay before the second attempt.
    pub initial_delay: Duration,

    /// Backoff multiplier applied after each rejected attempt.
    pub multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(1),
            multiplier: 2,
        }
    }
}

impl RetryPolicy {
    /// Create a policy with defaults (3 attempts, 1s initial delay, x2).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum attempt count.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set the initial backoff delay.
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the backoff multiplier.
    pub fn with_multiplier(mut self, multiplier: u32) -> Self {
        self.multiplier = multiplier;
        self
    }
}

/// Run the produce-validate loop until acceptance or budget exhaustion.
///
/// Returns the validated record on acceptance. Returns
/// `GuardrError::RetryExhausted` carrying the last rejection reason when
/// every attempt was rejected. No delay is slept after the final attempt.
pub async fn run_with_retry<P: Producer>(
    policy: &RetryPolicy,
    producer: &mut P,
    validator: &GuardrailValidator,
) -> Result<StructuredResult> {
    if policy.max_attempts == 0 {
        return Err(GuardrError::RetryExhausted {
            attempts: 0,
            reason: "retry policy allows no attempts".to_string(),
        });
    }

    let mut delay = policy.initial_delay;
    let mut feedback = CorrectiveFeedback::new();
    let mut last_reason = String::new();

    for attempt in 1..=policy.max_attempts {
        let prompt = if feedback.is_empty() {
            None
        } else {
            Some(feedback.render(validator.schema()))
        };

        let raw = producer.produce(prompt.as_deref()).await?;

        match validator.validate(&raw) {
            ValidationOutcome::Accepted(result) => {
                info!(
                    "guardrail accepted '{}' on attempt {}/{}",
                    validator.schema().name(),
                    attempt,
                    policy.max_attempts
                );
                return Ok(result);
            }
            ValidationOutcome::Rejected(rejection) => {
                warn!(
                    "attempt {}/{} rejected ({}): {}",
                    attempt,
                    policy.max_attempts,
                    rejection.kind,
                    rejection.reason
                );
                last_reason = rejection.reason.clone();
                feedback.record(attempt, &rejection);

                if attempt < policy.max_attempts {
                    tokio::time::sleep(delay).await;
                    delay = delay.saturating_mul(policy.multiplier);
                }
            }
        }
    }

    Err(GuardrError::RetryExhausted {
        attempts: policy.max_attempts,
        reason: last_reason,
    })
}
