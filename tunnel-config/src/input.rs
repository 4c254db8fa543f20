/// Trimmed config text with `\/` escapes already resolved.
///
/// JSON producers commonly escape forward slashes; YAML never needs it, and
/// the escaped form must not leak into URI detection or parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput(String);

impl RawInput {
    pub fn new(input: &str) -> Self {
        Self(input.trim().replace("\\/", "/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
