use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use staff_roster::config::{ConfigLoader, RosterConfig};
use staff_roster::console;
use staff_roster::roster::Roster;

/// Environment variable naming the configuration file.
const CONFIG_ENV: &str = "STAFF_ROSTER_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "roster.yaml";

fn main() {
    // Logs go to stderr so they do not interleave with the menu.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Failures are reported, never turned into a non-zero exit code.
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
    }
}

fn run() -> anyhow::Result<()> {
    let config = load_config();
    let data_file = PathBuf::from(&config.storage.data_file);
    info!(data_file = %data_file.display(), "Starting staff roster");

    let mut roster = Roster::with_rates(config.pay);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    console::load_at_startup(&mut roster, &data_file, &mut stdout)?;
    console::run(&mut roster, stdin.lock(), stdout.lock(), &data_file)
        .context("console session ended unexpectedly")
}

/// Loads the configuration named on the command line or in the environment,
/// falling back to `roster.yaml` and then to the built-in defaults.
fn load_config() -> RosterConfig {
    let explicit = env::args().nth(1).or_else(|| env::var(CONFIG_ENV).ok());
    let loaded = match &explicit {
        Some(path) => ConfigLoader::load(path),
        None => ConfigLoader::load_or_default(DEFAULT_CONFIG_FILE),
    };

    match loaded {
        Ok(loader) => loader.into_config(),
        Err(err) => {
            warn!(error = %err, "Using default configuration");
            eprintln!("{}; using default settings", err);
            RosterConfig::default()
        }
    }
}
