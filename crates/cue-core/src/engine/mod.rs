//! Activation engine
//!
//! Evaluates every rule in a rule set against a prompt and a recent-file
//! snapshot, resolves explicit command-to-skill bindings with override
//! priority, deduplicates, and produces a ranked activation list together
//! with its trigger log events.

pub mod command;
pub mod context;
pub mod evaluate;
pub mod ranker;

pub use command::detect_command;
pub use context::ActivationContext;
pub use evaluate::{evaluate, Activation, MatchReason, SkillMatch};
