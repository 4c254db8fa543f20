use anyhow::{Context, Result};
use tunnel_config::normalize_tunnel_config;

use crate::cli::InputArgs;
use crate::source::read_input;

pub fn run_normalize(args: InputArgs) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let transport = normalize_tunnel_config(&input).context("failed to normalize config")?;
    println!("{}", transport.as_str().trim_end());
    Ok(())
}
