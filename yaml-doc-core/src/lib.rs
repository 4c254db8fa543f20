//! Generic YAML (and JSON) document parsing, inspection and writing primitives
//! used by higher-level config tools.

pub mod de;
pub mod parser;
pub mod tree;
pub mod writer;

pub use parser::{decode, parse, ParseError};
pub use serde_yaml::{Mapping, Value};
pub use tree::{NodeExt, NodeKind};
pub use writer::{write, write_serialize, WriteError};
