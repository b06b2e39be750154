//! Rule set document

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::rule::SkillRule;

/// A parsed `skill-rules.json` document
///
/// Skills live in a name-ordered map so iteration at the matcher stage is
/// deterministic across loads of the same document. An unresolvable
/// document degrades to [`SkillRules::empty`], never to an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillRules {
    /// Document format version
    pub version: String,

    /// Human-readable description of the rule set
    pub description: String,

    /// Rules by skill name
    pub skills: BTreeMap<String, SkillRule>,

    /// Command token -> rule names unconditionally bound to that command
    pub command_skill_bindings: HashMap<String, Vec<String>>,
}

impl SkillRules {
    /// The empty rule set used when no document can be resolved
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the set carries no rules and no bindings
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.command_skill_bindings.is_empty()
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Register a rule under a name
    pub fn insert(&mut self, name: impl Into<String>, rule: SkillRule) {
        self.skills.insert(name.into(), rule);
    }

    /// Get a rule by name
    pub fn get(&self, name: &str) -> Option<&SkillRule> {
        self.skills.get(name)
    }

    /// Check if a rule exists
    pub fn contains(&self, name: &str) -> bool {
        self.skills.contains_key(name)
    }

    /// Bind a command token to an ordered list of rule names
    pub fn bind_command<I, S>(&mut self, command: impl Into<String>, skills: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command_skill_bindings
            .insert(command.into(), skills.into_iter().map(Into::into).collect());
    }

    /// Rule names bound to a command token, in binding order
    pub fn command_skills(&self, command: &str) -> &[String] {
        self.command_skill_bindings
            .get(command)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
