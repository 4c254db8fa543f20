use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tunnel_config::settings::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "tunnel-config")]
#[command(about = "Normalize and validate proxy tunnel configurations")]
pub struct Cli {
    /// Settings TOML file. Defaults to the built-in settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Normalize a config and validate it by resolving its first hop.
    Parse(ParseArgs),
    /// Report which input format a config uses.
    Detect(InputArgs),
    /// Print the canonical transport config without validating it.
    Normalize(InputArgs),
}

#[derive(Parser, Debug)]
pub struct InputArgs {
    /// Config file to read. Reads stdin when absent or `-`.
    pub file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Output format. Overrides the settings file.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum FormatArg {
    Json,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}
