use colored::Colorize;
use serde::Serialize;

use crate::error::PlatformError;
use crate::pipeline::TunnelConfigResult;
use crate::response::TunnelConfigJson;

/// Exactly one of `value` or `error`, mirroring the method-call result the app consumes.
#[derive(Debug, Serialize)]
pub struct ResultEnvelope<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a PlatformError>,
}

impl<'a> From<&'a TunnelConfigResult> for ResultEnvelope<'a> {
    fn from(result: &'a TunnelConfigResult) -> Self {
        match result {
            Ok(value) => Self {
                value: Some(value.as_str()),
                error: None,
            },
            Err(error) => Self {
                value: None,
                error: Some(error),
            },
        }
    }
}

/// Render a pipeline result as a JSON envelope.
pub fn render_json(result: &TunnelConfigResult, pretty: bool) -> serde_json::Result<String> {
    let envelope = ResultEnvelope::from(result);
    if pretty {
        serde_json::to_string_pretty(&envelope)
    } else {
        serde_json::to_string(&envelope)
    }
}

/// Render a pipeline result for terminal output.
pub fn render_text(result: &TunnelConfigResult) -> String {
    match result {
        Ok(value) => match serde_json::from_str::<TunnelConfigJson>(value) {
            Ok(config) => render_config(&config),
            Err(_) => value.clone(),
        },
        Err(err) => render_error(err),
    }
}

fn render_config(config: &TunnelConfigJson) -> String {
    let first_hop = if config.first_hop.is_empty() {
        "-"
    } else {
        config.first_hop.as_str()
    };
    let mut out = format!("{} first_hop={first_hop}", "ok".green());
    out.push('\n');
    out.push_str(config.transport.trim_end());
    out
}

/// Render a [`PlatformError`] with one line per detail entry.
pub fn render_error(err: &PlatformError) -> String {
    let mut lines = vec![format!(
        "{} code={} message={}",
        "error".red(),
        err.code,
        err.message
    )];
    for (key, value) in err.details.iter().flatten() {
        let value = value
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string());
        lines.push(format!("  {}: {value}", key.yellow()));
    }
    lines.join("\n")
}
