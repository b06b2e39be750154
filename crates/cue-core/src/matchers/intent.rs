//! Intent pattern matching

use regex::RegexBuilder;

/// Case-insensitive regex test of any pattern against the prompt.
///
/// A pattern that fails to compile is treated as non-matching for that
/// pattern only; sibling patterns are still evaluated.
pub fn matches_intent(prompt: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map(|re| re.is_match(prompt))
            .unwrap_or(false)
    })
}
