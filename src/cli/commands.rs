// src/cli/commands.rs
use chrono::NaiveDate;
use clap::Subcommand;

use crate::core::config::Config;
use crate::models::GenerationPolicy;

/// Generation policy flags shared by `generate` and `estimate`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PolicyArgs {
    /// Password length (4-50)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Leave out look-alike characters (i, l, 1, L, o, 0, O)
    #[arg(long)]
    pub exclude_similar: bool,
}

impl PolicyArgs {
    pub fn to_policy(&self, config: &Config) -> GenerationPolicy {
        let defaults = config.default_policy();
        GenerationPolicy {
            length: self.length.unwrap_or(defaults.length),
            use_uppercase: !self.no_uppercase,
            use_lowercase: !self.no_lowercase,
            use_digits: !self.no_digits,
            use_symbols: !self.no_symbols,
            exclude_similar: self.exclude_similar || defaults.exclude_similar,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate passwords
    Generate {
        #[command(flatten)]
        policy: PolicyArgs,

        /// How many passwords to generate
        #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=1000))]
        count: u16,

        /// Guarantee every enabled character type appears
        #[arg(long)]
        ensure_coverage: bool,

        /// Seed the generator for reproducible output (not for real secrets)
        #[arg(long)]
        seed: Option<u64>,

        /// Copy the last generated password to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Rate the strength of a password
    Evaluate {
        /// Password to rate
        #[arg(allow_hyphen_values = true)]
        candidate: String,
    },

    /// Rate a generation policy without generating
    Estimate {
        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Show security tiers for a stored credential
    Security {
        /// Security score of the record (0-100)
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        score: u8,

        /// Date the password was last changed (YYYY-MM-DD)
        #[arg(long, conflicts_with = "age_days")]
        changed: Option<NaiveDate>,

        /// Days since the password was last changed
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
        age_days: Option<i64>,
    },

    /// Open the interactive password generator
    Interactive,

    /// Run the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(long, env = "WEB_PORT")]
        port: Option<u16>,

        /// Address to bind
        #[arg(long, env = "WEB_ADDRESS")]
        address: Option<String>,
    },
}
