//! Cue core library
//!
//! Rule-driven skill activation: given a free-text user prompt, a snapshot
//! of recently touched file paths, and a declarative rule set, decide which
//! named skills should be recommended or auto-invoked, at what urgency, and
//! why.
//!
//! # Overview
//!
//! A rule matches through one or more independent signals:
//! - **command** - the prompt starts with a `/ultra-*` command that is
//!   explicitly bound to the skill; this overrides everything else
//! - **keyword** - a case-insensitive substring of the prompt
//! - **intent** - a case-insensitive regex match against the prompt
//! - **file** - a recently touched path matches a glob pattern and no
//!   exclusion pattern
//!
//! Matches are ranked by priority class (critical > high > medium > low)
//! and then enforcement class (block > warn > suggest > auto). Every
//! activation decision is appended to a size-rotated JSONL trigger log.
//!
//! # Example
//!
//! ```rust
//! use cue_core::engine::{evaluate, ActivationContext};
//! use cue_core::rules::{Enforcement, Priority, SkillRule, SkillRules};
//!
//! let mut rules = SkillRules::empty();
//! rules.insert(
//!     "refactoring",
//!     SkillRule::new(Enforcement::Suggest, Priority::High).with_keywords(["refactor"]),
//! );
//!
//! let context = ActivationContext::new("Please REFACTOR this module");
//! let activation = evaluate(&context, &rules);
//! assert_eq!(activation.ranked, vec!["refactoring".to_string()]);
//! ```

pub mod engine;
pub mod error;
pub mod matchers;
pub mod resolve;
pub mod rules;
pub mod trigger_log;

// Re-export commonly used types
pub use engine::{evaluate, Activation, ActivationContext, MatchReason, SkillMatch};
pub use error::{CueError, CueResult};
pub use rules::{Enforcement, FileTriggers, Priority, PromptTriggers, SkillRule, SkillRules};
pub use trigger_log::{TriggerLogEvent, TriggerLogWriter};
