//! jot - in-memory JSON value tree.
//!
//! Parses JSON text into a tree of typed values, lets callers query,
//! mutate, clone, and serialize the tree. Single-threaded, no I/O of its
//! own beyond the explicit [`write`] sink.
//!
//! # Architecture
//!
//! - **lexer.rs** - tokenizer with one-token lookahead, string unescaping
//! - **parser.rs** - recursive descent from tokens to a [`Value`] tree
//! - **value.rs** - the value variants, constructors, accessors
//! - **array.rs** / **map.rs** - the two owning containers
//! - **path.rs** - `.member[index]` path queries
//! - **ser.rs** - compact/pretty serialization to text or a sink
//!
//! # Example
//!
//! ```
//! use jot_core::{parse, to_text, Value};
//!
//! let root = parse(r#"{"name": "jot", "tags": [1, 2]}"#).unwrap();
//! assert_eq!(root.path(".tags[1]"), &Value::Integer(2));
//!
//! let copy = root.clone();
//! drop(root);
//! assert!(to_text(&copy, false).contains("\"name\":\"jot\""));
//! ```

pub mod array;
pub mod lexer;
pub mod map;
pub mod parser;
pub mod path;
pub mod ser;
pub mod value;

pub use array::Array;
pub use lexer::{Lexer, ParseError, ParseErrorCode, Token};
pub use map::ObjectMap;
pub use parser::parse;
pub use path::PathError;
pub use ser::{to_text, write};
pub use value::Value;
