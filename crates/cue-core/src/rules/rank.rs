//! Priority and enforcement classes
//!
//! Both classes are closed enumerations with an explicit fallback variant
//! so that documents carrying values outside the known set still load and
//! rank below everything known. The rank tables here are canonical; new
//! values must be added explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency tier of a rule, independent of enforcement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    /// Anything outside the known set ranks below `Low`
    Unranked,
}

impl Priority {
    /// Numeric rank used by the ranker (higher sorts first)
    pub const fn rank(self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
            Self::Unranked => 0,
        }
    }

    /// Canonical lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unranked => "unranked",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Unranked
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "critical" => Self::Critical,
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Unranked,
        }
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.as_str().to_string()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How strongly an activation should influence behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Enforcement {
    Suggest,
    Warn,
    Block,
    Auto,
    /// Anything outside the known set ranks below `Auto`
    Unknown,
}

impl Enforcement {
    /// Numeric rank used by the ranker (higher sorts first)
    pub const fn rank(self) -> u8 {
        match self {
            Self::Block => 4,
            Self::Warn => 3,
            Self::Suggest => 2,
            Self::Auto => 1,
            Self::Unknown => 0,
        }
    }

    /// Canonical lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Suggest => "suggest",
            Self::Warn => "warn",
            Self::Block => "block",
            Self::Auto => "auto",
            Self::Unknown => "unknown",
        }
    }
}

impl Default for Enforcement {
    fn default() -> Self {
        Self::Unknown
    }
}

impl From<String> for Enforcement {
    fn from(value: String) -> Self {
        match value.as_str() {
            "suggest" => Self::Suggest,
            "warn" => Self::Warn,
            "block" => Self::Block,
            "auto" => Self::Auto,
            _ => Self::Unknown,
        }
    }
}

impl From<Enforcement> for String {
    fn from(enforcement: Enforcement) -> Self {
        enforcement.as_str().to_string()
    }
}

impl fmt::Display for Enforcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_rank_order() {
        assert!(Priority::Critical.rank() > Priority::High.rank());
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
        assert!(Priority::Low.rank() > Priority::Unranked.rank());
    }

    #[test]
    fn test_enforcement_rank_order() {
        assert!(Enforcement::Block.rank() > Enforcement::Warn.rank());
        assert!(Enforcement::Warn.rank() > Enforcement::Suggest.rank());
        assert!(Enforcement::Suggest.rank() > Enforcement::Auto.rank());
        assert!(Enforcement::Auto.rank() > Enforcement::Unknown.rank());
    }

    #[test]
    fn test_priority_from_unknown_string() {
        assert_eq!(Priority::from("urgent".to_string()), Priority::Unranked);
        assert_eq!(Priority::from(String::new()), Priority::Unranked);
    }

    #[test]
    fn test_deserialize_known_values() {
        let priority: Priority = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(priority, Priority::Critical);

        let enforcement: Enforcement = serde_json::from_str("\"block\"").unwrap();
        assert_eq!(enforcement, Enforcement::Block);
    }

    #[test]
    fn test_deserialize_unknown_values_fall_back() {
        let priority: Priority = serde_json::from_str("\"sky-high\"").unwrap();
        assert_eq!(priority, Priority::Unranked);

        let enforcement: Enforcement = serde_json::from_str("\"nag\"").unwrap();
        assert_eq!(enforcement, Enforcement::Unknown);
    }

    #[test]
    fn test_serialize_round_trip() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"high\"");

        let json = serde_json::to_string(&Enforcement::Suggest).unwrap();
        assert_eq!(json, "\"suggest\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(Priority::Medium.to_string(), "medium");
        assert_eq!(Enforcement::Warn.to_string(), "warn");
    }
}
