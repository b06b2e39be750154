//! Command token detection

use once_cell::sync::Lazy;
use regex::Regex;

/// Commands are a fixed `/ultra-` prefix followed by an identifier at the
/// start of the prompt, ignoring leading whitespace and letter case.
static COMMAND_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(/ultra-\w+)").expect("command token pattern is valid"));

/// Extract the command token from the start of a prompt, if present.
///
/// The returned token is normalized to lowercase so it can be looked up
/// directly in the command bindings.
pub fn detect_command(prompt: &str) -> Option<String> {
    COMMAND_TOKEN
        .captures(prompt)
        .map(|caps| caps[1].to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_command_at_start() {
        assert_eq!(
            detect_command("/ultra-deploy the service"),
            Some("/ultra-deploy".to_string())
        );
    }

    #[test]
    fn test_ignores_leading_whitespace() {
        assert_eq!(
            detect_command("   /ultra-review please"),
            Some("/ultra-review".to_string())
        );
    }

    #[test]
    fn test_normalizes_case() {
        assert_eq!(
            detect_command("/Ultra-Deploy now"),
            Some("/ultra-deploy".to_string())
        );
    }

    #[test]
    fn test_mid_prompt_command_is_not_detected() {
        assert_eq!(detect_command("run /ultra-deploy later"), None);
    }

    #[test]
    fn test_other_slash_commands_are_not_detected() {
        assert_eq!(detect_command("/deploy"), None);
        assert_eq!(detect_command("/ultra-"), None);
    }
}
