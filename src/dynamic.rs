//! A document that accumulates values across repeated `set` calls.

use tracing::trace;

use crate::builder::{BuildError, Builder};
use crate::config::Config;
use crate::document::Value;
use crate::keypath::{ParseMode, Parser};

/// Owns a root object and applies key paths to it.
///
/// # Example
///
/// ```
/// use objquill::DynamicObject;
///
/// let mut doc = DynamicObject::new();
/// doc.set("orders:array.item:string", "apple").unwrap();
/// doc.set("orders:array.item:string", "pear").unwrap();
///
/// assert_eq!(
///     doc.get_object().to_json_compact().unwrap(),
///     r#"{"orders":[{"item":"apple"},{"item":"pear"}]}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicObject {
    root: Value,
    mode: ParseMode,
}

impl DynamicObject {
    /// Creates an empty object using strict parsing.
    pub fn new() -> Self {
        Self::with_object(Value::object())
    }

    /// Wraps an existing value. A non-object root makes every `set` fail.
    pub fn with_object(initial: Value) -> Self {
        Self {
            root: initial,
            mode: ParseMode::Strict,
        }
    }

    /// Wraps an existing value, taking the parse mode from `config`.
    pub fn with_config(initial: Value, config: &Config) -> Self {
        Self {
            root: initial,
            mode: config.parse_mode,
        }
    }

    pub fn parse_mode(&self) -> ParseMode {
        self.mode
    }

    /// Applies `path` to the held object and returns it.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<&Value, BuildError> {
        let path = Parser::parse_with_mode(path, self.mode)?;
        Builder::new(&mut self.root).set_value(&path, value)?;
        trace!(path = %path, "dynamic object updated");
        Ok(&self.root)
    }

    /// Returns the held object.
    pub fn get_object(&self) -> &Value {
        &self.root
    }

    pub fn into_inner(self) -> Value {
        self.root
    }
}

impl Default for DynamicObject {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for DynamicObject {
    fn from(initial: Value) -> Self {
        Self::with_object(initial)
    }
}
