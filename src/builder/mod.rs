//! Applies parsed key paths to a document.
//!
//! A path either contains an `Array` segment or it does not, and the two cases
//! behave differently:
//!
//! - With an `Array` segment, the rightmost one is the pivot. Everything up to
//!   the pivot is navigated (and created where missing), then a new entry is
//!   pushed onto the pivot array. Segments after the pivot shape that entry.
//!   Repeating a call always adds another entry; earlier entries are untouched.
//! - Without one, every segment but the last is navigated as an object and the
//!   value is assigned to the last key, replacing whatever was there.
//!
//! # Example
//!
//! ```
//! use objquill::builder::create_object;
//! use objquill::document::Value;
//!
//! let doc = create_object(Value::object(), "a:object.b:array.c:string", "v1").unwrap();
//! let doc = create_object(doc, "a:object.b:array.c:string", "v2").unwrap();
//!
//! assert_eq!(
//!     doc.to_json_compact().unwrap(),
//!     r#"{"a":{"b":[{"c":"v1"},{"c":"v2"}]}}"#
//! );
//! ```

pub mod error;

use indexmap::IndexMap;
use tracing::debug;

use crate::document::Value;
use crate::keypath::{KeyPath, KeyPathError, ParseMode, Parser, Segment};

pub use error::BuildError;

type Fields = IndexMap<String, Value>;

/// Writes values into a root object along key paths.
pub struct Builder<'a> {
    root: &'a mut Value,
}

impl<'a> Builder<'a> {
    pub fn new(root: &'a mut Value) -> Self {
        Builder { root }
    }

    /// Applies `path` to the root, storing or appending `value`.
    ///
    /// Fails with `InvalidTarget` if the root is not an object, or if the path
    /// has to pass through an existing non-object value. Nothing is created
    /// until navigation has passed every existing value, so a failed call
    /// leaves the document as it was.
    pub fn set_value(&mut self, path: &KeyPath, value: impl Into<Value>) -> Result<(), BuildError> {
        let fields = match &mut *self.root {
            Value::Object(fields) => fields,
            other => {
                return Err(BuildError::InvalidTarget {
                    key: None,
                    found: other.kind(),
                })
            }
        };

        let segments = path.segments();
        if segments.is_empty() {
            return Err(KeyPathError::EmptyPath.into());
        }

        let value = value.into();
        match path.pivot() {
            Some(pivot) => {
                debug!(path = %path, pivot, "appending array entry");
                append_entry(fields, segments, pivot, value)
            }
            None => {
                debug!(path = %path, "assigning field");
                assign_field(fields, segments, value)
            }
        }
    }
}

/// Parses `path` in strict mode and applies it to `starter`, returning it.
pub fn create_object(
    starter: Value,
    path: &str,
    value: impl Into<Value>,
) -> Result<Value, BuildError> {
    create_object_with_mode(starter, path, value, ParseMode::Strict)
}

/// Like [`create_object`], with an explicit parse mode.
pub fn create_object_with_mode(
    mut starter: Value,
    path: &str,
    value: impl Into<Value>,
    mode: ParseMode,
) -> Result<Value, BuildError> {
    let path = Parser::parse_with_mode(path, mode)?;
    Builder::new(&mut starter).set_value(&path, value)?;
    Ok(starter)
}

fn append_entry(
    root: &mut Fields,
    segments: &[Segment],
    pivot: usize,
    value: Value,
) -> Result<(), BuildError> {
    let (leading, rest) = segments.split_at(pivot);
    let (pivot_segment, remaining) = match rest.split_first() {
        Some(split) => split,
        None => return Err(KeyPathError::EmptyPath.into()),
    };

    let mut current = root;
    for segment in leading {
        current = if segment.is_array() {
            last_entry(child_array(current, &segment.key))
        } else {
            child_object(current, &segment.key)?
        };
    }

    // With nothing after the pivot the value itself is the new entry.
    child_array(current, &pivot_segment.key).push(build_entry(remaining, value));
    Ok(())
}

fn assign_field(root: &mut Fields, segments: &[Segment], value: Value) -> Result<(), BuildError> {
    let (last, parents) = match segments.split_last() {
        Some(split) => split,
        None => return Err(KeyPathError::EmptyPath.into()),
    };

    let mut current = root;
    for segment in parents {
        current = child_object(current, &segment.key)?;
    }

    current.insert(last.key.clone(), value);
    Ok(())
}

/// Builds a fresh subtree for the segments after the pivot.
fn build_entry(remaining: &[Segment], value: Value) -> Value {
    let mut child = value;
    for segment in remaining.iter().rev() {
        let slot = if segment.is_array() {
            Value::Array(vec![child])
        } else {
            child
        };
        let mut fields = Fields::new();
        fields.insert(segment.key.clone(), slot);
        child = Value::Object(fields);
    }
    child
}

/// Returns the object at `key`, creating it if absent.
fn child_object<'v>(fields: &'v mut Fields, key: &str) -> Result<&'v mut Fields, BuildError> {
    match fields.entry(key.to_string()).or_insert_with(Value::object) {
        Value::Object(child) => Ok(child),
        other => Err(BuildError::InvalidTarget {
            key: Some(key.to_string()),
            found: other.kind(),
        }),
    }
}

/// Returns the array at `key`, replacing an absent or non-array value.
fn child_array<'v>(fields: &'v mut Fields, key: &str) -> &'v mut Vec<Value> {
    let slot = fields.entry(key.to_string()).or_insert_with(Value::array);
    if !slot.is_array() {
        *slot = Value::array();
    }
    match slot {
        Value::Array(items) => items,
        _ => unreachable!("slot was just set to an array"),
    }
}

/// Returns the last object in `items`, pushing an empty one if there is none.
fn last_entry(items: &mut Vec<Value>) -> &mut Fields {
    if !matches!(items.last(), Some(Value::Object(_))) {
        items.push(Value::object());
    }
    match items.last_mut() {
        Some(Value::Object(fields)) => fields,
        _ => unreachable!("last entry was just ensured to be an object"),
    }
}
