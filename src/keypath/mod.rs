//! Typed dotted-path parsing.
//!
//! A key path is a `.`-separated list of segments, each naming a field and
//! optionally annotating it with a type. The structural types decide which
//! container gets created at a key; the leaf types only describe the value.
//!
//! # Supported Syntax
//!
//! - `key` - Object field (no annotation defaults to object)
//! - `key:obj` or `key:object` - Object field
//! - `key:array` - Array field; the last one in a path is the append point
//! - `key:string`, `key:number`, `key:boolean` - Leaf annotations
//!
//! # Examples
//!
//! ```
//! // user:object.name:string        - {"user": {"name": ...}}
//! // user:object.tags:array         - {"user": {"tags": [...]}}
//! // orders:array.item:string       - {"orders": [{"item": ...}, ...]}
//! ```

pub mod ast;
pub mod error;
pub mod parser;

pub use ast::{KeyPath, Segment, SegmentType};
pub use error::KeyPathError;
pub use parser::{ParseMode, Parser};
