use pretty_assertions::assert_eq;
use yaml_doc_core::{parse, NodeExt, Value};

#[test]
fn parses_json_as_yaml() {
    let node = parse(r#"{"server": "example.com", "server_port": 4321, "prefix": "POST "}"#)
        .expect("JSON should parse as YAML");

    assert_eq!(node.text_field("server"), Some("example.com"));
    assert_eq!(node.field("server_port").and_then(Value::as_u64), Some(4321));
    assert_eq!(node.text_field("prefix"), Some("POST "));
}

#[test]
fn expands_aliases_into_full_copies() {
    let aliased = parse(
        "tcp: &shared\n  $type: shadowsocks\n  endpoint: example.com:80\nudp: *shared\n",
    )
    .expect("aliased parse");
    let expanded = parse(
        "tcp:\n  $type: shadowsocks\n  endpoint: example.com:80\nudp:\n  $type: shadowsocks\n  endpoint: example.com:80\n",
    )
    .expect("expanded parse");

    assert_eq!(aliased, expanded);
}

#[test]
fn decodes_unicode_escapes_in_double_quoted_scalars() {
    let node = parse(r#"message: "\u26a0 Key \u1000\u102d""#).expect("parse");
    assert_eq!(node.text_field("message"), Some("\u{26a0} Key \u{1000}\u{102d}"));
}

#[test]
fn rejects_multiple_documents() {
    assert!(parse("a: 1\n---\nb: 2\n").is_err());
}
