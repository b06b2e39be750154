//! Skill rule model
//!
//! Rules are declared in a JSON document (`skill-rules.json`) mapping skill
//! names to trigger predicates, a priority class, and an enforcement class.
//! The engine treats a loaded rule set as immutable for the duration of one
//! evaluation.

pub mod rank;
pub mod rule;
pub mod rule_set;

pub use rank::{Enforcement, Priority};
pub use rule::{FileTriggers, PromptTriggers, SkillRule};
pub use rule_set::SkillRules;
