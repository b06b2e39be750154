//! Activation reminder rendering

use colored::Colorize;

use cue_core::engine::Activation;
use cue_core::rules::{Enforcement, SkillRules};

/// Render the activation reminder shown to the host.
///
/// Command-bound activations come first, then auto-enforcement matches the
/// assistant must use, then optional suggestions, then block notices.
pub fn reminder(activation: &Activation, rules: &SkillRules) -> String {
    let mut message = String::new();

    if let Some(command) = activation.detected_command.as_deref() {
        if !activation.command_bound.is_empty() {
            message.push_str(&format!(
                "\n{} {}\n",
                "Skills auto-activated for".bold(),
                command.cyan().bold()
            ));
            for skill in &activation.command_bound {
                let description = rules
                    .get(skill)
                    .map(|rule| rule.description.as_str())
                    .unwrap_or("");
                message.push_str(&format!("  - {}: {}\n", skill.bold(), description));
            }
            message.push_str("Follow these skills while executing the command.\n\n");
        }
    }

    let organic: Vec<&str> = activation
        .ranked
        .iter()
        .filter(|name| !activation.command_bound.contains(name))
        .map(String::as_str)
        .collect();

    let (auto, optional): (Vec<&str>, Vec<&str>) = organic.iter().copied().partition(|name| {
        rules
            .get(name)
            .map(|rule| rule.enforcement == Enforcement::Auto)
            .unwrap_or(false)
    });

    if !auto.is_empty() {
        message.push_str(&format!(
            "{} {}\n",
            "Using skills:".bold(),
            auto.join(", ")
        ));
        message.push_str("Invoke these skills before responding.\n");
    }

    if !optional.is_empty() {
        message.push_str(&format!("{} {}\n", "Optional:".dimmed(), optional.join(", ")));
    }

    for name in &organic {
        if let Some(rule) = rules.get(name) {
            if rule.enforcement == Enforcement::Block {
                if let Some(block_message) = &rule.block_message {
                    message.push_str(&format!("{} {}\n", "Blocked:".red().bold(), block_message));
                }
            }
        }
    }

    message
}
