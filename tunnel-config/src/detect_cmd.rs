use anyhow::{Context, Result};
use tunnel_config::detect::detect_shape;
use tunnel_config::input::RawInput;

use crate::cli::InputArgs;
use crate::source::read_input;

pub fn run_detect(args: InputArgs) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let shape =
        detect_shape(&RawInput::new(&input)).context("failed to detect config format")?;
    println!("format={}", shape.name());
    Ok(())
}
