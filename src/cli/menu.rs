// src/cli/menu.rs
use std::fmt;

use inquire::{InquireError, MultiSelect, Select, Text};

use crate::cli::handlers::{render_assessment, render_notification};
use crate::clipboard::{copy_secret, Clipboard};
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{CharacterClass, GenerationPolicy};
use crate::strength::{estimate_policy, evaluate_with};
use crate::utils::describe_secret;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Regenerate,
    Copy,
    Accept,
    Length,
    CharacterTypes,
    ToggleSimilar,
    Exit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Regenerate => write!(f, "🔄  Regenerate"),
            Action::Copy => write!(f, "📋  Copy to clipboard"),
            Action::Accept => write!(f, "✅  Use this password"),
            Action::Length => write!(f, "📏  Change length"),
            Action::CharacterTypes => write!(f, "🔠  Choose character types"),
            Action::ToggleSimilar => write!(f, "👓  Toggle similar characters"),
            Action::Exit => write!(f, "❌  Exit"),
        }
    }
}

/// Actions offered for the current candidate. An empty candidate cannot be
/// regenerated, copied or accepted until the policy is fixed.
fn available_actions(password: &str) -> Vec<Action> {
    let mut actions = Vec::new();
    if !password.is_empty() {
        actions.extend([Action::Regenerate, Action::Copy, Action::Accept]);
    }
    actions.extend([Action::Length, Action::CharacterTypes, Action::ToggleSimilar, Action::Exit]);
    actions
}

fn print_dialog(policy: &GenerationPolicy, password: &str, config: &Config) {
    let classes: Vec<String> = policy.enabled_classes().iter().map(|c| c.to_string()).collect();

    println!();
    println!("╔══════════════════════════════════════╗");
    println!("║        🔐 PASSWORD GENERATOR         ║");
    println!("╚══════════════════════════════════════╝");
    println!(
        "Length: {} | Types: {} | Exclude similar: {}",
        policy.length,
        if classes.is_empty() { "none".to_string() } else { classes.join(", ") },
        if policy.exclude_similar { "yes" } else { "no" }
    );

    if password.is_empty() {
        println!("Configure options to generate password");
        return;
    }

    println!("\nGenerated Password: {}", password);
    println!("{}", render_assessment(&evaluate_with(password, config.scoring_strategy)));
    println!("Policy {}", render_assessment(&estimate_policy(policy)));
}

fn prompt_length(current: usize) -> Result<Option<usize>, InquireError> {
    let default = current.to_string();
    let input = Text::new("Password length (4-50):")
        .with_default(&default)
        .prompt()?;

    match input.trim().parse::<usize>() {
        Ok(length) => Ok(Some(length)),
        Err(_) => {
            println!("❌ '{}' is not a number", input.trim());
            Ok(None)
        }
    }
}

fn prompt_classes(policy: &GenerationPolicy) -> Result<Vec<CharacterClass>, InquireError> {
    let defaults: Vec<usize> = CharacterClass::ALL
        .iter()
        .enumerate()
        .filter(|(_, class)| policy.is_enabled(**class))
        .map(|(i, _)| i)
        .collect();

    MultiSelect::new("Character types:", CharacterClass::ALL.to_vec())
        .with_default(&defaults)
        .prompt()
}

fn dialog_loop(config: &Config, clipboard: &mut dyn Clipboard) -> Result<Option<String>, InquireError> {
    let generator = PasswordGenerator::new().with_class_coverage(config.ensure_class_coverage);
    let mut policy = config.default_policy();
    let mut password = generator.generate_password(&policy);

    loop {
        print_dialog(&policy, &password, config);

        let selection = Select::new("Choose an option:", available_actions(&password))
            .with_help_message("Use arrow keys to navigate, Enter to select, Esc to exit.")
            .prompt_skippable()?;

        match selection {
            Some(Action::Regenerate) => {
                password = generator.generate_password(&policy);
            }
            Some(Action::Copy) => {
                if let Some(notification) = copy_secret(clipboard, &password) {
                    println!("{}", render_notification(&notification));
                }
            }
            Some(Action::Accept) => {
                log::info!("Password accepted ({})", describe_secret(&password));
                return Ok(Some(password));
            }
            Some(Action::Length) => {
                if let Some(length) = prompt_length(policy.length)? {
                    policy.length = length;
                    if let Err(e) = policy.validate() {
                        println!("⚠️ {}", e);
                    }
                    password = generator.generate_password(&policy);
                }
            }
            Some(Action::CharacterTypes) => {
                let selected = prompt_classes(&policy)?;
                for class in CharacterClass::ALL {
                    policy.set_enabled(class, selected.contains(&class));
                }
                if let Err(e) = policy.validate() {
                    println!("⚠️ {}", e);
                }
                password = generator.generate_password(&policy);
            }
            Some(Action::ToggleSimilar) => {
                policy.exclude_similar = !policy.exclude_similar;
                password = generator.generate_password(&policy);
            }
            Some(Action::Exit) | None => return Ok(None),
        }
    }
}

/// Run the interactive generator until the user accepts a password or leaves.
pub fn run_generator_dialog(config: &Config, clipboard: &mut dyn Clipboard) -> Result<Option<String>, InquireError> {
    match dialog_loop(config, clipboard) {
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            log::info!("Generator dialog closed by user");
            Ok(None)
        }
        other => other,
    }
}
