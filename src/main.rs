use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

use passforge::api;
use passforge::cli::handlers::{self, render_estimate, render_evaluate, render_generate, render_security};
use passforge::cli::menu::run_generator_dialog;
use passforge::cli::{Args, CliCommand};
use passforge::clipboard::{copy_secret, SystemClipboard};
use passforge::core::config::Config;
use passforge::generators::PasswordGenerator;
use passforge::logging;

// Exit code for a policy that cannot generate
const EXIT_INVALID_POLICY: u8 = 2;

fn print_output<T: Serialize>(json: bool, output: &T, render: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(output)?);
    } else {
        println!("{}", render(output));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let (mut config, config_warnings) = Config::load();
    if let Some(strategy) = args.strategy {
        config.scoring_strategy = strategy;
    }

    logging::init(&config).context("Failed to initialise logging")?;
    for warning in &config_warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    let json = args.json;
    let strategy = config.scoring_strategy;

    match args.command.unwrap_or(CliCommand::Interactive) {
        CliCommand::Generate { policy, count, ensure_coverage, seed, copy } => {
            let policy = policy.to_policy(&config);
            let generator = PasswordGenerator::new()
                .with_class_coverage(ensure_coverage || config.ensure_class_coverage);
            let count = usize::from(count);

            let result = match seed {
                Some(seed) => {
                    log::warn!("Seeded generation is reproducible; do not use it for real secrets");
                    handlers::handle_generate(&policy, &generator, count, strategy, &mut ChaCha20Rng::seed_from_u64(seed))
                }
                None => handlers::handle_generate(&policy, &generator, count, strategy, &mut rand::thread_rng()),
            };

            let mut output = match result {
                Ok(output) => output,
                Err(e) => {
                    eprintln!("❌ Cannot generate password: {}", e);
                    return Ok(ExitCode::from(EXIT_INVALID_POLICY));
                }
            };

            if copy {
                output.notification = output
                    .passwords
                    .last()
                    .and_then(|last| copy_secret(&mut SystemClipboard, &last.password));
            }

            print_output(json, &output, render_generate)?;
        }
        CliCommand::Evaluate { candidate } => {
            let output = handlers::handle_evaluate(&candidate, strategy);
            print_output(json, &output, render_evaluate)?;
        }
        CliCommand::Estimate { policy } => {
            let policy = policy.to_policy(&config);
            match handlers::handle_estimate(&policy) {
                Ok(output) => print_output(json, &output, render_estimate)?,
                Err(e) => {
                    eprintln!("❌ Cannot estimate policy: {}", e);
                    return Ok(ExitCode::from(EXIT_INVALID_POLICY));
                }
            }
        }
        CliCommand::Security { score, changed, age_days } => {
            let output = handlers::handle_security(score, changed, age_days, chrono::Utc::now());
            print_output(json, &output, render_security)?;
        }
        CliCommand::Interactive => {
            let accepted = run_generator_dialog(&config, &mut SystemClipboard)
                .context("Interactive generator failed")?;
            if let Some(password) = accepted {
                println!("{}", password);
            }
        }
        CliCommand::Serve { port, address } => {
            if let Some(port) = port {
                config.web_port = port;
            }
            if let Some(address) = address {
                config.web_address = address;
            }
            println!("🚀 API server starting on {}:{}", config.web_address, config.web_port);
            api::start_server(config).await.context("API server failed")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
