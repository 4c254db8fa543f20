use anyhow::{bail, Result};
use tunnel_config::endpoint::StaticTransportProvider;
use tunnel_config::parse_tunnel_config;
use tunnel_config::report::{render_json, render_text};
use tunnel_config::settings::{OutputFormat, Settings};

use crate::cli::ParseArgs;
use crate::source::read_input;

pub fn run_parse(args: ParseArgs, settings: &Settings) -> Result<()> {
    let input = read_input(args.input.file.as_deref())?;
    let result = parse_tunnel_config(&input, &StaticTransportProvider);

    let format = args
        .format
        .map(OutputFormat::from)
        .unwrap_or(settings.output.format);
    match format {
        OutputFormat::Json => println!(
            "{}",
            render_json(&result, args.pretty || settings.output.pretty)?
        ),
        OutputFormat::Text => println!("{}", render_text(&result)),
    }

    if let Err(err) = result {
        bail!("parse failed: {}", err.code);
    }
    Ok(())
}
