// src/cli/mod.rs
use clap::Parser;

use crate::models::ScoringStrategy;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::{CliCommand, PolicyArgs};

#[derive(Parser, Debug)]
#[command(name = "passforge", author, version, about, long_about = None)]
pub struct Args {
    /// Print JSON instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Scoring strategy: step (out of 6) or weighted (out of 100)
    #[arg(long, global = true)]
    pub strategy: Option<ScoringStrategy>,

    /// Command to execute (defaults to the interactive generator)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
