//! Code-fence normalization.
//!
//! Models routinely wrap JSON responses in markdown fences (```json ... ```).
//! The validator strips one surrounding fence before parsing; anything else
//! is left untouched so a genuine parse failure reports the original text.

/// Strip one surrounding triple-backtick fence, with optional language tag.
///
/// Returns the inner content trimmed of surrounding whitespace. Input without
/// a complete fence (no opener, or no closer) is returned trimmed but
/// otherwise unchanged, so the call is idempotent on unfenced text.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };

    // Drop the opening fence line when it is empty or a bare language tag
    // (e.g. "json"); otherwise the content starts on the fence line itself.
    let body = match body.split_once('\n') {
        Some((first, remainder)) if is_language_tag(first.trim_end()) => remainder,
        _ => body,
    };

    body.trim()
}

fn is_language_tag(line: &str) -> bool {
    line.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
