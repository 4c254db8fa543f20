use pretty_assertions::assert_eq;
use yaml_doc_core::{parse, NodeExt, Value};

use super::*;
use crate::error::ErrorCode;
use crate::response::TunnelConfigJson;
use crate::transport::TransportClient;

fn hops(
    stream: &'static str,
    packet: &'static str,
) -> impl Fn(&CanonicalTransportText) -> Result<TransportClient, PlatformError> {
    move |_: &CanonicalTransportText| -> Result<TransportClient, PlatformError> {
        Ok(TransportClient {
            stream_first_hop: stream.to_string(),
            packet_first_hop: packet.to_string(),
        })
    }
}

fn single_hop(
    hop: &'static str,
) -> impl Fn(&CanonicalTransportText) -> Result<TransportClient, PlatformError> {
    hops(hop, hop)
}

fn unreachable_provider(_: &CanonicalTransportText) -> Result<TransportClient, PlatformError> {
    panic!("transport provider must not be called");
}

fn decode(value: &str) -> TunnelConfigJson {
    serde_json::from_str(value).expect("response should be TunnelConfigJson")
}

#[test]
fn nested_config_with_alias() {
    let result = parse_tunnel_config(
        r#"
transport:
  $type: tcpudp
  tcp: &shared
    $type: shadowsocks
    endpoint: example.com:80
    cipher: chacha20-ietf-poly1305
    secret: SECRET
  udp: *shared"#,
        &single_hop("example.com:80"),
    )
    .expect("nested config should parse");

    let response = decode(&result);
    assert_eq!(response.first_hop, "example.com:80");

    let transport = parse(&response.transport).expect("transport re-parses");
    assert_eq!(transport.text_field("$type"), Some("tcpudp"));
    assert_eq!(transport.field("tcp"), transport.field("udp"));
    assert_eq!(
        transport.field("udp").and_then(|udp| udp.text_field("secret")),
        Some("SECRET")
    );
}

#[test]
fn legacy_json_config() {
    let config = r#"{
    "server": "example.com",
    "server_port": 4321,
    "method": "chacha20-ietf-poly1305",
    "password": "SECRET",
	"prefix": "POST "
}"#;
    let result = parse_tunnel_config(config, &single_hop("example.com:4321"))
        .expect("legacy JSON should parse");

    assert_eq!(
        result,
        "{\"firstHop\":\"example.com:4321\",\"transport\":\"server: example.com\\nserver_port: 4321\\nmethod: chacha20-ietf-poly1305\\npassword: SECRET\\nprefix: 'POST '\\n\"}"
    );
}

#[test]
fn legacy_yaml_config_matches_legacy_json() {
    let config = r#"
server: example.com
server_port: 4321
method: chacha20-ietf-poly1305
password: SECRET
prefix: "POST "
"#;
    let yaml = parse_tunnel_config(config, &single_hop("example.com:4321")).expect("yaml");
    let json = parse_tunnel_config(
        r#"{"server":"example.com","server_port":4321,"method":"chacha20-ietf-poly1305","password":"SECRET","prefix":"POST "}"#,
        &single_hop("example.com:4321"),
    )
    .expect("json");

    assert_eq!(yaml, json);
}

#[test]
fn uri_passes_through_verbatim() {
    let uri = "ss://Y2hhY2hhMjAtaWV0Zi1wb2x5MTMwNTpTRUNSRVQ@example.com:4321/?outline=1";
    let seen = std::cell::RefCell::new(String::new());
    let provider = |text: &CanonicalTransportText| -> Result<TransportClient, PlatformError> {
        seen.replace(text.as_str().to_string());
        Ok(TransportClient::single_hop("example.com:4321"))
    };

    let response = decode(&parse_tunnel_config(&format!("\n  {uri}\n"), &provider).expect("uri"));

    assert_eq!(response.transport, uri);
    assert_eq!(response.first_hop, "example.com:4321");
    assert_eq!(seen.into_inner(), uri);
}

#[test]
fn provider_error_with_details() {
    let err = parse_tunnel_config(
        r#"
error:
  message: Unauthorized
  details: Account expired
"#,
        &unreachable_provider,
    )
    .expect_err("provider error");

    assert_eq!(
        err,
        PlatformError::new(ErrorCode::ProviderError, "Unauthorized")
            .with_detail("details", "Account expired")
    );
}

#[test]
fn provider_error_without_details() {
    let err = parse_tunnel_config("error:\n  message: Unauthorized\n", &unreachable_provider)
        .expect_err("provider error");

    assert_eq!(err, PlatformError::new(ErrorCode::ProviderError, "Unauthorized"));
    assert!(serde_json::to_string(&err).expect("json").find("details").is_none());
}

#[test]
fn provider_error_with_numeric_message() {
    let err = parse_tunnel_config(
        "error:\n  message: 404\n  details: Not Found\n",
        &unreachable_provider,
    )
    .expect_err("provider error");

    assert_eq!(
        err,
        PlatformError::new(ErrorCode::ProviderError, "404").with_detail("details", "Not Found")
    );
}

#[test]
fn legacy_numeric_password_is_quoted_in_transport() {
    let result = parse_tunnel_config(
        "server: example.com\nserver_port: 8388\nmethod: aes-256-gcm\npassword: 123456\n",
        &single_hop("example.com:8388"),
    )
    .expect("numeric password");

    let response = decode(&result);
    assert_eq!(response.first_hop, "example.com:8388");
    assert_eq!(
        response.transport,
        "server: example.com\nserver_port: 8388\nmethod: aes-256-gcm\npassword: '123456'\nprefix: ''\n"
    );
}

#[test]
fn provider_error_decodes_unicode_escapes() {
    let err = parse_tunnel_config(
        r#"
error:
  message: "\u26a0 Invalid Access Key \/ Key \u1000\u102d\u102f\u1015\u103c\u1014\u103a\u101c\u100a\u103a\u1005\u1005\u103a\u1006\u1031\u1038\u1015\u1031\u1038\u1015\u102b\u104b"
  details: "\u26a0 Details \/ Key \u1000\u102d\u102f\u1015\u103c\u1014\u103a\u101c\u100a\u103a\u1005\u1005\u103a\u1006\u1031\u1038\u1015\u1031\u1038\u1015\u102b\u104b"
"#,
        &unreachable_provider,
    )
    .expect_err("provider error");

    assert_eq!(
        err,
        PlatformError::new(
            ErrorCode::ProviderError,
            "\u{26a0} Invalid Access Key / Key ကိုပြန်လည်စစ်ဆေးပေးပါ။"
        )
        .with_detail("details", "\u{26a0} Details / Key ကိုပြန်လည်စစ်ဆေးပေးပါ။")
    );
}

#[test]
fn malformed_input_is_invalid_config() {
    let err = parse_tunnel_config(
        r#"{"server": "example.com", "server_port": 4321"#,
        &unreachable_provider,
    )
    .expect_err("unbalanced JSON");

    assert_eq!(err.code, ErrorCode::InvalidConfig);
    assert!(err.message.starts_with("failed to parse: "), "{}", err.message);
    assert!(err.details.is_none());
}

#[test]
fn split_first_hops_still_return_transport() {
    let response = decode(
        &parse_tunnel_config(
            "transport:\n  $type: tcpudp\n  tcp: ss://x@a:1\n  udp: ss://x@b:2\n",
            &hops("a:1", "b:2"),
        )
        .expect("split hops are not an error"),
    );

    assert_eq!(response.first_hop, "");
    assert_eq!(response.transport, "$type: tcpudp\ntcp: ss://x@a:1\nudp: ss://x@b:2\n");
}

#[test]
fn provider_failure_passes_through_unchanged() {
    let expected = PlatformError::new(ErrorCode::InvalidConfig, "unsupported cipher rc4-md5")
        .with_detail("field", "method");
    let provider = |_: &CanonicalTransportText| -> Result<TransportClient, PlatformError> {
        Err(expected.clone())
    };

    let err = parse_tunnel_config("server: example.com\nmethod: rc4-md5\n", &provider)
        .expect_err("provider failure");

    assert_eq!(err, expected);
}

// Accepted on purpose: a document with no recognised keys is an empty legacy config.
#[test]
fn unrecognised_document_is_accepted_as_empty_legacy_config() {
    let response =
        decode(&parse_tunnel_config("hello: world\n", &hops("", "")).expect("lenient legacy"));

    assert_eq!(response.first_hop, "");
    assert_eq!(
        response.transport,
        "server: ''\nserver_port: 0\nmethod: ''\npassword: ''\nprefix: ''\n"
    );
}

#[test]
fn normalize_stops_before_validation() {
    let text =
        normalize_tunnel_config("server: example.com\nserver_port: 443\n").expect("normalize");
    let reparsed = parse(text.as_str()).expect("re-parse");
    assert_eq!(reparsed.text_field("server"), Some("example.com"));
    assert_eq!(reparsed.field("server_port").and_then(Value::as_u64), Some(443));
}

#[test]
fn escaped_slashes_are_unescaped_before_parsing() {
    let text =
        normalize_tunnel_config(r#"{"transport": "ss:\/\/x@example.com:1"}"#).expect("normalize");
    assert_eq!(text.as_str(), "ss://x@example.com:1\n");
}
