//! Config file location discovery
//!
//! This module handles finding the files the activation pipeline reads and
//! writes:
//! - Project rules: `.cue/skill-rules.json`
//! - User rules: `~/.config/cue/skill-rules.json`
//! - Recent-files cache: `.cue/cache/recent-files.json`
//! - Trigger log: `.cue/logs/skill-triggers.jsonl`

use std::path::{Path, PathBuf};

/// Resolved file locations for one activation run
#[derive(Debug, Clone)]
pub struct Locations {
    /// Project-level rules, if a project root was found
    pub project_rules: Option<PathBuf>,

    /// User-level rules (~/.config/cue/skill-rules.json)
    pub user_rules: PathBuf,

    /// Recent-files cache, if a project root was found
    pub recent_files: Option<PathBuf>,

    /// Trigger log target (project logs dir, or the user config dir when
    /// no project root was found)
    pub trigger_log: PathBuf,

    /// Project root directory
    pub project_root: Option<PathBuf>,
}

impl Locations {
    /// Discover locations from the current directory
    pub fn discover() -> Self {
        Self::discover_from(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Discover locations from a specific start directory
    pub fn discover_from(start_dir: impl AsRef<Path>) -> Self {
        let user_config = Self::user_config_dir();
        let user_rules = user_config.join("skill-rules.json");
        let project_root = Self::find_project_root(&start_dir);

        let (project_rules, recent_files, trigger_log) = match &project_root {
            Some(root) => {
                let cue_dir = root.join(".cue");
                (
                    Some(cue_dir.join("skill-rules.json")),
                    Some(cue_dir.join("cache").join("recent-files.json")),
                    cue_dir.join("logs").join("skill-triggers.jsonl"),
                )
            }
            None => (
                None,
                None,
                user_config.join("logs").join("skill-triggers.jsonl"),
            ),
        };

        Self {
            project_rules,
            user_rules,
            recent_files,
            trigger_log,
            project_root,
        }
    }

    /// Candidate rule files in resolution order: project first, then user
    pub fn rule_candidates(&self) -> impl Iterator<Item = &Path> {
        self.project_rules
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.user_rules.as_path()))
    }

    /// The user config directory (~/.config/cue)
    pub fn user_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("cue")
    }

    /// Find the project root by looking for a .cue directory or .git
    fn find_project_root(start_dir: impl AsRef<Path>) -> Option<PathBuf> {
        let start = start_dir.as_ref().to_path_buf();
        let mut current = if start.is_absolute() {
            start
        } else {
            std::env::current_dir().ok()?.join(start).canonicalize().ok()?
        };

        loop {
            if current.join(".cue").is_dir() {
                return Some(current);
            }

            if current.join(".git").exists() {
                return Some(current);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }
}

impl Default for Locations {
    fn default() -> Self {
        Self::discover()
    }
}
