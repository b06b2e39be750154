//! Rule evaluation

use chrono::{SecondsFormat, Utc};
use std::fmt;

use crate::matchers;
use crate::rules::{Enforcement, Priority, SkillRules};
use crate::trigger_log::TriggerLogEvent;

use super::command::detect_command;
use super::context::ActivationContext;
use super::ranker;

/// Prompt previews in log events are capped at this many characters
const PREVIEW_CHARS: usize = 100;

/// How a rule came to match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchReason {
    /// Force-matched through an explicit command binding
    Command,

    /// Matched by one or more organic signals
    Organic {
        keyword: bool,
        intent: bool,
        file: bool,
    },
}

impl MatchReason {
    fn organic(keyword: bool, intent: bool, file: bool) -> Option<Self> {
        (keyword || intent || file).then_some(Self::Organic {
            keyword,
            intent,
            file,
        })
    }
}

impl fmt::Display for MatchReason {
    /// Reason tokens join with `+` in fixed order: keyword, intent, file.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command => f.write_str("command"),
            Self::Organic {
                keyword,
                intent,
                file,
            } => {
                let mut first = true;
                for (token, hit) in [("keyword", keyword), ("intent", intent), ("file", file)] {
                    if *hit {
                        if !first {
                            f.write_str("+")?;
                        }
                        f.write_str(token)?;
                        first = false;
                    }
                }
                Ok(())
            }
        }
    }
}

/// One matched rule with its resolved metadata
#[derive(Debug, Clone)]
pub struct SkillMatch {
    /// Matched rule name
    pub name: String,

    /// Resolved priority (the rule's own, or critical for command matches)
    pub priority: Priority,

    /// Resolved enforcement (the rule's own, or auto for command matches)
    pub enforcement: Enforcement,

    /// Match provenance
    pub reason: MatchReason,
}

/// Result of one evaluation
#[derive(Debug, Clone, Default)]
pub struct Activation {
    /// All matched skill names, ranked
    pub ranked: Vec<String>,

    /// Subset force-activated through a command binding, in binding order
    pub command_bound: Vec<String>,

    /// The detected command token, if any
    pub detected_command: Option<String>,

    /// One log event per matched rule, sharing one evaluation timestamp
    pub events: Vec<TriggerLogEvent>,
}

impl Activation {
    /// Whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Evaluate a rule set against a prompt and recent-file snapshot.
///
/// Command-bound rules are force-matched with critical priority and auto
/// enforcement and are skipped by organic matching entirely; every other
/// rule matches through its own prompt and file triggers, carrying its
/// declared metadata. The result is ranked by priority then enforcement
/// and contains each rule name at most once.
///
/// An empty prompt short-circuits to the empty result; an empty rule set
/// (the degraded form of an unresolvable document) yields the same.
pub fn evaluate(context: &ActivationContext, rules: &SkillRules) -> Activation {
    if context.prompt.is_empty() {
        return Activation::default();
    }

    let detected_command = detect_command(&context.prompt);

    // Step 1: command bindings override everything for the bound rules.
    let mut command_bound: Vec<String> = Vec::new();
    if let Some(command) = detected_command.as_deref() {
        for name in rules.command_skills(command) {
            if rules.contains(name) && !command_bound.iter().any(|bound| bound == name) {
                command_bound.push(name.clone());
            }
        }
    }

    let mut matches: Vec<SkillMatch> = command_bound
        .iter()
        .map(|name| SkillMatch {
            name: name.clone(),
            priority: Priority::Critical,
            enforcement: Enforcement::Auto,
            reason: MatchReason::Command,
        })
        .collect();

    // Step 2: organic matching for every rule not already command-bound.
    for (name, rule) in &rules.skills {
        if command_bound.iter().any(|bound| bound == name) {
            continue;
        }

        let mut keyword = false;
        let mut intent = false;
        if let Some(triggers) = &rule.prompt_triggers {
            keyword = matchers::matches_keyword(&context.prompt, &triggers.keywords);
            intent = matchers::matches_intent(&context.prompt, &triggers.intent_patterns);
        }

        let mut file = false;
        if !context.recent_files.is_empty() {
            if let Some(triggers) = &rule.file_triggers {
                file = matchers::matches_path(
                    &context.recent_files,
                    &triggers.path_patterns,
                    &triggers.path_exclusions,
                );
            }
        }

        if let Some(reason) = MatchReason::organic(keyword, intent, file) {
            matches.push(SkillMatch {
                name: name.clone(),
                priority: rule.priority,
                enforcement: rule.enforcement,
                reason,
            });
        }
    }

    ranker::rank_matches(&mut matches);

    // One shared timestamp per evaluation.
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let preview = prompt_preview(&context.prompt);
    let events = matches
        .iter()
        .map(|m| TriggerLogEvent {
            timestamp: timestamp.clone(),
            skill: m.name.clone(),
            match_reason: m.reason.to_string(),
            enforcement: m.enforcement.to_string(),
            priority: m.priority.to_string(),
            prompt_preview: preview.clone(),
        })
        .collect();

    Activation {
        ranked: matches.into_iter().map(|m| m.name).collect(),
        command_bound,
        detected_command,
        events,
    }
}

/// The prompt truncated to [`PREVIEW_CHARS`] characters, with a trailing
/// ellipsis marker when truncated.
fn prompt_preview(prompt: &str) -> String {
    if prompt.chars().count() > PREVIEW_CHARS {
        let head: String = prompt.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        prompt.to_string()
    }
}
