//! Skill rule definition

use serde::{Deserialize, Serialize};

use super::rank::{Enforcement, Priority};

/// Prompt-based trigger predicates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptTriggers {
    /// Case-insensitive substrings of the prompt
    pub keywords: Vec<String>,

    /// Regex sources matched case-insensitively anywhere in the prompt
    pub intent_patterns: Vec<String>,
}

/// File-context trigger predicates
///
/// Glob semantics: `**` matches any sequence of characters including path
/// separators, a single `*` matches any sequence excluding path separators,
/// and `.` is literal. A file matching any exclusion is disqualified
/// regardless of inclusion patterns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileTriggers {
    /// Inclusion globs over recently touched paths
    pub path_patterns: Vec<String>,

    /// Exclusion globs, checked first per candidate file
    pub path_exclusions: Vec<String>,
}

/// A named skill activation rule
///
/// Rules are declared in `skill-rules.json`:
///
/// ```json
/// {
///   "type": "guideline",
///   "enforcement": "suggest",
///   "priority": "high",
///   "description": "Safe refactoring workflow",
///   "promptTriggers": {
///     "keywords": ["refactor", "restructure"],
///     "intentPatterns": ["clean\\s+up"]
///   },
///   "fileTriggers": {
///     "pathPatterns": ["src/**/*.ts"],
///     "pathExclusions": ["**/generated/**"]
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRule {
    /// Free-form tag, not interpreted by the engine
    #[serde(rename = "type", default)]
    pub rule_type: String,

    /// How strongly a match should influence behavior
    #[serde(default)]
    pub enforcement: Enforcement,

    /// Urgency tier used for ranking
    #[serde(default)]
    pub priority: Priority,

    /// Human-readable description, shown when the rule activates
    #[serde(default)]
    pub description: String,

    /// Prompt-based triggers, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_triggers: Option<PromptTriggers>,

    /// File-context triggers, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_triggers: Option<FileTriggers>,

    /// Message surfaced when a block-enforcement rule activates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_message: Option<String>,
}

// Builder methods, used heavily by tests and programmatic rule sets
impl SkillRule {
    /// Create a rule with the given enforcement and priority
    pub fn new(enforcement: Enforcement, priority: Priority) -> Self {
        Self {
            rule_type: String::new(),
            enforcement,
            priority,
            description: String::new(),
            prompt_triggers: None,
            file_triggers: None,
            block_message: None,
        }
    }

    /// Set the free-form type tag
    pub fn with_type(mut self, rule_type: impl Into<String>) -> Self {
        self.rule_type = rule_type.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the prompt keyword triggers
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prompt_triggers
            .get_or_insert_with(PromptTriggers::default)
            .keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the prompt intent pattern triggers
    pub fn with_intent_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prompt_triggers
            .get_or_insert_with(PromptTriggers::default)
            .intent_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the file path inclusion triggers
    pub fn with_path_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_triggers
            .get_or_insert_with(FileTriggers::default)
            .path_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the file path exclusion globs
    pub fn with_path_exclusions<I, S>(mut self, exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_triggers
            .get_or_insert_with(FileTriggers::default)
            .path_exclusions = exclusions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the block message
    pub fn with_block_message(mut self, message: impl Into<String>) -> Self {
        self.block_message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_rule() {
        let json = r#"{
            "type": "guideline",
            "enforcement": "warn",
            "priority": "high",
            "description": "Safe refactoring workflow",
            "promptTriggers": {
                "keywords": ["refactor"],
                "intentPatterns": ["clean\\s+up"]
            },
            "fileTriggers": {
                "pathPatterns": ["src/**/*.ts"],
                "pathExclusions": ["**/generated/**"]
            }
        }"#;

        let rule: SkillRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.rule_type, "guideline");
        assert_eq!(rule.enforcement, Enforcement::Warn);
        assert_eq!(rule.priority, Priority::High);

        let triggers = rule.prompt_triggers.unwrap();
        assert_eq!(triggers.keywords, vec!["refactor"]);
        assert_eq!(triggers.intent_patterns, vec!["clean\\s+up"]);

        let files = rule.file_triggers.unwrap();
        assert_eq!(files.path_patterns, vec!["src/**/*.ts"]);
        assert_eq!(files.path_exclusions, vec!["**/generated/**"]);
    }

    #[test]
    fn test_deserialize_minimal_rule() {
        let rule: SkillRule = serde_json::from_str("{}").unwrap();
        assert_eq!(rule.enforcement, Enforcement::Unknown);
        assert_eq!(rule.priority, Priority::Unranked);
        assert!(rule.prompt_triggers.is_none());
        assert!(rule.file_triggers.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        // Older documents carry fields like contentPatterns; they must not
        // fail the load.
        let json = r#"{
            "enforcement": "suggest",
            "priority": "low",
            "fileTriggers": {
                "pathPatterns": ["**/*.sql"],
                "contentPatterns": ["SELECT"]
            }
        }"#;

        let rule: SkillRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.file_triggers.unwrap().path_patterns, vec!["**/*.sql"]);
    }

    #[test]
    fn test_builder() {
        let rule = SkillRule::new(Enforcement::Block, Priority::Critical)
            .with_type("policy")
            .with_description("No direct pushes")
            .with_keywords(["push", "force"])
            .with_path_patterns(["**/.git/**"])
            .with_block_message("Use a pull request instead");

        assert_eq!(rule.rule_type, "policy");
        assert_eq!(rule.prompt_triggers.as_ref().unwrap().keywords.len(), 2);
        assert!(rule.block_message.is_some());
    }
}
