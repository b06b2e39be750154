//! Cue CLI - the skill activation hook
//!
//! Runs once per user prompt: resolves the project's rule documents,
//! evaluates the prompt and recent-file snapshot against them, prints an
//! activation reminder for the host to inject, and appends the trigger
//! log.
//!
//! The hook must never fail its host: every internal problem degrades to
//! "no skills activated" and a zero exit.
//!
//! ```bash
//! cue "refactor the parser"
//! echo "refactor the parser" | cue
//! ```

mod args;
mod render;

use clap::Parser;
use std::io::Read;

use args::Cli;
use cue_core::engine::{evaluate, ActivationContext};
use cue_core::resolve::{load_recent_files, load_rules, Locations};
use cue_core::trigger_log::TriggerLogWriter;

fn main() {
    // Initialize logging with environment-based filtering
    // Set RUST_LOG=debug for verbose logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let prompt = match cli.prompt {
        Some(prompt) => prompt,
        None => read_stdin(),
    };

    let locations = match &cli.working_dir {
        Some(dir) => Locations::discover_from(dir),
        None => Locations::discover(),
    };

    let rules = load_rules(&locations);
    let recent_files = load_recent_files(&locations);

    let context = ActivationContext::new(prompt).with_recent_files(recent_files);
    let activation = evaluate(&context, &rules);

    TriggerLogWriter::new(&locations.trigger_log).append(&activation.events);

    if !activation.is_empty() {
        print!("{}", render::reminder(&activation, &rules));
    }
}

/// Hook hosts pipe the prompt over stdin when no argument is given.
fn read_stdin() -> String {
    let mut prompt = String::new();
    let _ = std::io::stdin().read_to_string(&mut prompt);
    prompt.trim_end_matches('\n').to_string()
}
