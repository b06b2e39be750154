//! Trigger log event

use serde::{Deserialize, Serialize};

/// One activation decision, serialized as a single JSONL record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerLogEvent {
    /// Evaluation timestamp, ISO-8601
    pub timestamp: String,

    /// Matched skill name
    pub skill: String,

    /// Match provenance, e.g. `command` or `keyword+file`
    pub match_reason: String,

    /// Resolved enforcement class
    pub enforcement: String,

    /// Resolved priority class
    pub priority: String,

    /// Prompt truncated to 100 characters
    pub prompt_preview: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let event = TriggerLogEvent {
            timestamp: "2026-08-07T10:00:00.000Z".to_string(),
            skill: "refactoring".to_string(),
            match_reason: "keyword+file".to_string(),
            enforcement: "suggest".to_string(),
            priority: "high".to_string(),
            prompt_preview: "refactor the parser".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"matchReason\":\"keyword+file\""));
        assert!(json.contains("\"promptPreview\""));

        let back: TriggerLogEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
