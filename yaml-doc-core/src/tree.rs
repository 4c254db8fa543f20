use std::fmt::{self, Display, Formatter};

use serde_yaml::Value;

/// Coarse classification of a [`Value`] node, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Sequence,
    Mapping,
    Tagged,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "bool",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Sequence => "sequence",
            NodeKind::Mapping => "mapping",
            NodeKind::Tagged => "tagged value",
        };
        f.write_str(name)
    }
}

/// Read-only helpers for walking a [`Value`] tree.
pub trait NodeExt {
    /// Return the child stored under `key` if this node is a mapping.
    fn field(&self, key: &str) -> Option<&Value>;

    /// Return the child under `key` if it is a string scalar.
    fn text_field(&self, key: &str) -> Option<&str>;

    /// True for null, empty strings, empty mappings and empty sequences.
    fn is_blank(&self) -> bool;

    fn kind(&self) -> NodeKind;
}

impl NodeExt for Value {
    fn field(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    fn text_field(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(Value::as_str)
    }

    fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Sequence(seq) => seq.is_empty(),
            Value::Mapping(map) => map.is_empty(),
            Value::Bool(_) | Value::Number(_) | Value::Tagged(_) => false,
        }
    }

    fn kind(&self) -> NodeKind {
        match self {
            Value::Null => NodeKind::Null,
            Value::Bool(_) => NodeKind::Bool,
            Value::Number(_) => NodeKind::Number,
            Value::String(_) => NodeKind::String,
            Value::Sequence(_) => NodeKind::Sequence,
            Value::Mapping(_) => NodeKind::Mapping,
            Value::Tagged(_) => NodeKind::Tagged,
        }
    }
}
