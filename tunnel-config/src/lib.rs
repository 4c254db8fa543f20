//! Tunnel configuration normalization and validation.
//!
//! Proxy configs reach the client in several historical shapes. This library
//! turns any of them into one canonical transport config, validates it by
//! building a transport client, and reports either the canonical config with
//! its first hop or a structured error.
//!
//! # Accepted inputs
//!
//! - `ss://` links, passed through verbatim
//! - Legacy flat Shadowsocks JSON or YAML (`server`, `server_port`, `method`,
//!   `password`, `prefix`)
//! - Modern YAML with a top-level `transport` subtree
//! - Provider errors: a top-level `error` with `message` and optional `details`
//!
//! # Architecture
//!
//! - [`input`] — Trim and unescape raw text
//! - [`detect`] — Classify the input shape once
//! - [`provider_error`] — Turn a provider's `error` payload into a [`PlatformError`]
//! - [`legacy`] — Flat legacy config and its canonical rendering
//! - [`canonical`] — Canonical transport text for every accepted shape
//! - [`transport`] — Contract for the client-building collaborator
//! - [`response`] — `{"firstHop", "transport"}` result assembly
//! - [`pipeline`] — The stages wired together
//! - [`endpoint`] — A provider that resolves first hops without dialing
//! - [`settings`] — CLI settings file
//! - [`report`] — Terminal rendering of results
//!
//! # Examples
//!
//! ```
//! use tunnel_config::endpoint::StaticTransportProvider;
//! use tunnel_config::{parse_tunnel_config, PlatformError};
//!
//! # fn main() -> Result<(), PlatformError> {
//! let json = parse_tunnel_config(
//!     r#"{"server": "example.com", "server_port": 4321, "method": "aes-256-gcm", "password": "s"}"#,
//!     &StaticTransportProvider,
//! )?;
//! assert!(json.contains(r#""firstHop":"example.com:4321""#));
//! # Ok(())
//! # }
//! ```
//!
//! # Built on yaml-doc-core
//!
//! Parsing and writing of YAML documents comes from `yaml-doc-core`. All
//! tunnel-specific logic lives in this crate.

pub mod canonical;
pub mod detect;
pub mod endpoint;
pub mod error;
pub mod input;
pub mod legacy;
pub mod pipeline;
pub mod provider_error;
pub mod report;
pub mod response;
pub mod settings;
pub mod transport;

pub use error::{ErrorCode, PlatformError};
pub use pipeline::{normalize_tunnel_config, parse_tunnel_config, TunnelConfigResult};
