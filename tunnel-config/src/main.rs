use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use tunnel_config::settings::{default_settings, load_settings, Settings, SettingsError};

mod cli;
mod detect_cmd;
mod normalize_cmd;
mod parse_cmd;
mod source;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (settings, fallback) = resolve_settings(cli.config.as_deref());
    init_logging(cli.verbose, &settings.log.filter);
    match fallback {
        Some(err) => warn!("{err}; using embedded defaults"),
        None => debug!(?settings, "settings loaded"),
    }

    match cli.command {
        Command::Parse(args) => parse_cmd::run_parse(args, &settings),
        Command::Detect(args) => detect_cmd::run_detect(args),
        Command::Normalize(args) => normalize_cmd::run_normalize(args),
    }
}

fn resolve_settings(path: Option<&std::path::Path>) -> (Settings, Option<SettingsError>) {
    let Some(path) = path else {
        return (default_settings(), None);
    };
    match load_settings(path) {
        Ok(settings) => (settings, None),
        Err(err) => (default_settings(), Some(err)),
    }
}

// RUST_LOG wins, then -v, then the settings file.
fn init_logging(verbose: u8, configured: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = match verbose {
            0 => configured,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
