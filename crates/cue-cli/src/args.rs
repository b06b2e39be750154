//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cue")]
#[command(about = "Cue - rule-driven skill activation for AI coding assistants")]
#[command(
    long_about = r#"Cue - rule-driven skill activation for AI coding assistants

USAGE:
  cue "your prompt"              # Evaluate a prompt
  echo "your prompt" | cue       # Evaluate a prompt from stdin
  cue --working-dir <dir> "..."  # Resolve project rules from <dir>

Rules are read from .cue/skill-rules.json (project) with a fallback to
~/.config/cue/skill-rules.json (user). Matched activations are printed to
stdout and appended to .cue/logs/skill-triggers.jsonl."#
)]
#[command(version)]
pub struct Cli {
    /// Prompt text to evaluate (read from stdin when omitted)
    pub prompt: Option<String>,

    /// Directory to resolve project configuration from
    #[arg(long)]
    pub working_dir: Option<PathBuf>,
}
