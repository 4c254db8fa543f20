use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;

use super::{check_cipher, validate_address};
use crate::detect::URI_PREFIX;
use crate::error::PlatformError;

/// Return the `host:port` of a Shadowsocks link after checking its cipher.
///
/// Accepts `ss://userinfo@host:port[/][?query][#tag]` where userinfo is
/// base64 or plain `method:password`, and `ss://BASE64(method:password@host:port)[#tag]`.
pub(super) fn first_hop(link: &str) -> Result<String, PlatformError> {
    let rest = link
        .strip_prefix(URI_PREFIX)
        .ok_or_else(|| PlatformError::invalid_config("transport link must start with ss://"))?;
    let rest = rest.split_once('#').map_or(rest, |(body, _tag)| body);
    let rest = rest.split_once('?').map_or(rest, |(body, _query)| body);
    let rest = rest.strip_suffix('/').unwrap_or(rest);

    let (userinfo, host_port) = match rest.rsplit_once('@') {
        Some((userinfo, host_port)) => (user_credentials(userinfo)?, host_port.to_string()),
        None => {
            let decoded = decode_base64(rest)?;
            let (userinfo, host_port) = decoded.rsplit_once('@').ok_or_else(|| {
                PlatformError::invalid_config("ss:// link is missing host and port")
            })?;
            (userinfo.to_string(), host_port.to_string())
        }
    };

    let method = userinfo.split_once(':').map_or(userinfo.as_str(), |(method, _)| method);
    check_cipher(method, "method")?;
    validate_address(&host_port)
}

fn user_credentials(userinfo: &str) -> Result<String, PlatformError> {
    if userinfo.contains(':') {
        Ok(userinfo.to_string())
    } else {
        decode_base64(userinfo)
    }
}

// Links in the wild mix the standard and URL-safe alphabets, padded or not.
fn decode_base64(text: &str) -> Result<String, PlatformError> {
    let normalized: String = text
        .chars()
        .filter(|c| *c != '=')
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    let bytes = STANDARD_NO_PAD.decode(normalized).map_err(|err| {
        PlatformError::invalid_config(format!("invalid base64 in ss:// link: {err}"))
    })?;
    String::from_utf8(bytes).map_err(|err| {
        PlatformError::invalid_config(format!("invalid UTF-8 in ss:// link: {err}"))
    })
}
