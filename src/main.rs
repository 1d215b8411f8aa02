mod cli_messages;
mod config;
mod consts;
mod counter;
mod effects;
mod elements;
mod error;
mod events;
mod feed;
mod format;
mod logging;
mod overlay;
mod random;
mod runtime;
mod session;
mod ui;
mod voting;

use crate::config::{Config, get_config_path};
use crate::format::{elide_address, generate_address};
use crate::random::SeededRandom;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the STKR page
    Start {
        /// Run without the terminal UI, printing page activity to stdout
        #[arg(long, action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Seed for the mock donation and voting data
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Voting power the viewer starts with
        #[arg(long, value_name = "POWER")]
        voting_power: Option<u64>,

        /// Interval between live donations, in milliseconds
        #[arg(long, value_name = "MILLIS")]
        feed_interval_ms: Option<u64>,

        /// Stop the donation feed after this many live donations
        #[arg(long, value_name = "TICKS")]
        max_ticks: Option<u64>,

        /// Paint the page background
        #[arg(long, action = clap::ArgAction::SetTrue)]
        with_background: bool,

        /// Config file to use instead of ~/.stkr/config.json
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Print mock wallet addresses
    Address {
        /// Number of addresses to print
        #[arg(long, default_value_t = 1)]
        count: usize,

        /// Seed for the generator
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Print the full 42-character address instead of the elided form
        #[arg(long, action = clap::ArgAction::SetTrue)]
        full: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_max_level();

    let args = Args::parse();
    match args.command {
        Command::Start {
            headless,
            seed,
            voting_power,
            feed_interval_ms,
            max_ticks,
            with_background,
            config,
        } => {
            let config_path = match config {
                Some(path) => path,
                None => get_config_path()?,
            };
            let mut config = match Config::load_or_default(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    print_cmd_error!("Failed to load config", "{}: {}", config_path.display(), e);
                    return Err(e.into());
                }
            };

            // Command-line flags take precedence over the config file.
            if seed.is_some() {
                config.seed = seed;
            }
            if let Some(voting_power) = voting_power {
                config.voting_power = voting_power;
            }
            if let Some(feed_interval_ms) = feed_interval_ms {
                config.feed_interval_ms = feed_interval_ms;
            }
            if with_background {
                config.with_background_color = true;
            }

            if max_ticks.is_some() && !headless {
                print_cmd_warn!(
                    "Feed limit",
                    "--max-ticks only stops the donation feed; the page stays open until you quit"
                );
            }

            start(config, headless, max_ticks).await
        }
        Command::Address { count, seed, full } => {
            let mut rng = SeededRandom::new(seed);
            for _ in 0..count {
                let address = generate_address(&mut rng);
                if full {
                    println!("{}", address);
                } else {
                    println!("{}", elide_address(&address));
                }
            }
            Ok(())
        }
    }
}

/// Starts the page session in the requested mode.
async fn start(config: Config, headless: bool, max_ticks: Option<u64>) -> Result<(), Box<dyn Error>> {
    let session = setup_session(config, max_ticks)?;
    if headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session).await
    }
}
