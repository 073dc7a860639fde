//! objquill builds nested objects and arrays from typed dotted paths.
//!
//! A path such as `user:object.orders:array.item:string` is parsed into typed
//! segments and applied to a root object. Paths that contain an array segment
//! append a new entry to the rightmost array on every call; paths without one
//! assign to their last key.
//!
//! ```
//! use objquill::{create_object, Value};
//!
//! let doc = create_object(Value::object(), "a:array", "x").unwrap();
//! let doc = create_object(doc, "a:array", "y").unwrap();
//! assert_eq!(doc.to_json_compact().unwrap(), r#"{"a":["x","y"]}"#);
//! ```

pub mod builder;
pub mod config;
pub mod document;
pub mod dynamic;
pub mod keypath;

pub use builder::{create_object, create_object_with_mode, BuildError, Builder};
pub use config::Config;
pub use document::{Number, Value};
pub use dynamic::DynamicObject;
pub use keypath::{KeyPath, KeyPathError, ParseMode, Parser, Segment, SegmentType};
