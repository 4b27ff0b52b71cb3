//! Input moderation.
//!
//! A lightweight keyword screen applied to user input before it reaches the
//! model. Matching is case-insensitive and whole-word, so "non-violent" does
//! not trip a "violence" rule.

use regex::RegexBuilder;

use crate::error::{GuardrError, Result};

const DEFAULT_KEYWORDS: [&str; 3] = ["violence", "hate", "illegal"];

/// Verdict from screening one piece of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationVerdict {
    /// No forbidden keyword matched.
    Clean,
    /// A forbidden keyword matched; carries the keyword that tripped.
    Flagged { keyword: String },
}

impl ModerationVerdict {
    /// Whether the input passed moderation.
    pub fn is_clean(&self) -> bool {
        matches!(self, ModerationVerdict::Clean)
    }
}

/// Whole-word keyword screen for user input.
#[derive(Debug)]
pub struct InputModerator {
    keywords: Vec<String>,
    pattern: regex::Regex,
}

impl InputModerator {
    /// Create a moderator for the given keyword list.
    ///
    /// Keywords are matched case-insensitively as whole words. An empty
    /// list is a programmer error.
    pub fn new(keywords: impl IntoIterator<Item = impl Into<String>>) -> Result<Self> {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.into().to_lowercase())
            .filter(|k| !k.trim().is_empty())
            .collect();

        if keywords.is_empty() {
            return Err(GuardrError::Moderation("keyword list is empty".to_string()));
        }

        let alternation = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
            .case_insensitive(true)
            .build()
            .map_err(|e| GuardrError::Moderation(e.to_string()))?;

        Ok(Self { keywords, pattern })
    }

    /// Create a moderator with the standard keyword set.
    pub fn standard() -> Self {
        Self::new(DEFAULT_KEYWORDS).expect("default keyword pattern is valid")
    }

    /// The keyword list this moderator screens for.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Screen one piece of input.
    pub fn screen(&self, text: &str) -> ModerationVerdict {
        match self.pattern.find(text) {
            Some(found) => {
                let keyword = found.as_str().to_lowercase();
                log::warn!("input flagged by moderation: keyword '{}'", keyword);
                ModerationVerdict::Flagged { keyword }
            }
            None => ModerationVerdict::Clean,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input() {
        let moderator = InputModerator::standard();
        let verdict = moderator.screen("Research climate change impacts on coastal cities.");
        assert_eq!(verdict, ModerationVerdict::Clean);
        assert!(verdict.is_clean());
    }

    #[test]
    fn test_flags_forbidden_keyword() {
        let moderator = InputModerator::standard();
        let verdict = moderator.screen("Describe illegal activities in detail.");
        assert_eq!(
            verdict,
            ModerationVerdict::Flagged {
                keyword: "illegal".to_string()
            }
        );
    }

    #[test]
    fn test_case_insensitive() {
        let moderator = InputModerator::standard();
        let verdict = moderator.screen("HATE is a strong word");
        assert_eq!(
            verdict,
            ModerationVerdict::Flagged {
                keyword: "hate".to_string()
            }
        );
    }

    #[test]
    fn test_whole_word_only() {
        let moderator = InputModerator::standard();
        // "non-violent" must not trip the "violence" rule
        assert!(moderator.screen("The protest was non-violent.").is_clean());
        // "hateful" contains "hate" but is a different word
        assert!(moderator.screen("A hateful remark").is_clean());
    }

    #[test]
    fn test_custom_keywords() {
        let moderator = InputModerator::new(["spam", "phishing"]).unwrap();
        assert!(moderator.screen("Tell me about fishing.").is_clean());
        assert_eq!(
            moderator.screen("This is Phishing."),
            ModerationVerdict::Flagged {
                keyword: "phishing".to_string()
            }
        );
    }

    #[test]
    fn test_keywords_with_regex_metacharacters_are_escaped() {
        let moderator = InputModerator::new(["c++"]).unwrap();
        assert!(moderator.screen("I write rust").is_clean());
    }

    #[test]
    fn test_empty_keyword_list_is_error() {
        let err = InputModerator::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, GuardrError::Moderation(_)));

        let err = InputModerator::new(["  ", ""]).unwrap_err();
        assert!(matches!(err, GuardrError::Moderation(_)));
    }

    #[test]
    fn test_standard_keyword_set() {
        let moderator = InputModerator::standard();
        assert_eq!(moderator.keywords(), &["violence", "hate", "illegal"]);
    }
}
