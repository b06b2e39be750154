//! Rule set and recent-file loading
//!
//! Loading is resilient by contract: a missing or unparsable document
//! degrades to the empty default and never fails the evaluation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{CueError, CueResult};
use crate::rules::SkillRules;

use super::locations::Locations;

/// One entry of the recent-files cache document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentFileEntry {
    /// Touched file path
    pub file: String,

    /// Touch timestamp, ISO-8601 (recorded by the cache maintainer, not
    /// read by the engine)
    pub timestamp: String,
}

/// Load the rule set from the first candidate location that parses.
///
/// Candidates are tried in resolution order (project first, then user);
/// a candidate that is missing or unparsable is skipped. With no usable
/// candidate the empty rule set is returned.
pub fn load_rules(locations: &Locations) -> SkillRules {
    for path in locations.rule_candidates() {
        match read_rules_file(path) {
            Ok(Some(rules)) => {
                debug!("loaded skill rules from {:?}", path);
                return rules;
            }
            Ok(None) => {}
            Err(e) => {
                warn!("skipping skill rules at {:?}: {}", path, e);
            }
        }
    }

    SkillRules::empty()
}

/// Read recent file paths from the cache, preserving order.
///
/// A missing or malformed cache yields an empty list.
pub fn load_recent_files(locations: &Locations) -> Vec<String> {
    let Some(path) = locations.recent_files.as_deref() else {
        return Vec::new();
    };

    match read_recent_files(path) {
        Ok(files) => files,
        Err(e) => {
            debug!("ignoring recent-files cache at {:?}: {}", path, e);
            Vec::new()
        }
    }
}

fn read_rules_file(path: &Path) -> CueResult<Option<SkillRules>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| CueError::rules(format!("failed to read {:?}: {}", path, e)))?;
    let rules = serde_json::from_str(&content)
        .map_err(|e| CueError::rules(format!("failed to parse {:?}: {}", path, e)))?;

    Ok(Some(rules))
}

fn read_recent_files(path: &Path) -> CueResult<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)?;
    let entries: Vec<RecentFileEntry> = serde_json::from_str(&content)?;

    Ok(entries.into_iter().map(|entry| entry.file).collect())
}
