//! Document value representation.
//!
//! `Value` is the tagged union every built document is made of: mappings,
//! sequences and leaf scalars. Mappings keep insertion order so that rendered
//! output follows the order in which paths were applied.
//!
//! # Example
//!
//! ```
//! use objquill::document::node::{Value, Number};
//! use indexmap::IndexMap;
//!
//! let mut fields = IndexMap::new();
//! fields.insert("name".to_string(), Value::from("objquill"));
//! fields.insert("version".to_string(), Value::Number(Number::Integer(1)));
//! let object = Value::Object(fields);
//!
//! assert!(object.is_object());
//! assert_eq!(object.get("name"), Some(&Value::from("objquill")));
//! ```

use indexmap::IndexMap;

/// Represents numbers (integer or float).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }
}

/// A document value.
///
/// `Object` and `Array` are the containers a key path navigates through;
/// everything else is a leaf. `Null` stands in for an absent value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Key-value pairs in insertion order
    Object(IndexMap<String, Value>),
    /// Ordered values
    Array(Vec<Value>),
    String(String),
    Number(Number),
    Boolean(bool),
    Null,
}

impl Value {
    /// Returns an empty object.
    pub fn object() -> Self {
        Value::Object(IndexMap::new())
    }

    /// Returns an empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// Returns true if this value is an object.
    ///
    /// # Example
    ///
    /// ```
    /// use objquill::document::node::Value;
    ///
    /// assert!(Value::object().is_object());
    /// assert!(!Value::from(42).is_object());
    /// ```
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns true if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this value is an object or an array.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Name of this value's kind, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Object(_) => "object",
            Value::Array(_) => "array",
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Null => "null",
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut IndexMap<String, Value>> {
        match self {
            Value::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up a field of an object. Returns `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|fields| fields.get(key))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(Number::Integer(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(Number::Integer(v as i64))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Number(Number::Integer(v as i64))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(Number::Float(v))
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Value::Number(v)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(v: IndexMap<String, Value>) -> Self {
        Value::Object(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

/// `None` becomes `Null`, which is how an absent value is written.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Number(Number::Integer(i)),
                None => Value::Number(Number::Float(n.as_f64().unwrap_or(f64::NAN))),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_display() {
        assert_eq!(format!("{}", Number::Integer(42)), "42");
        assert_eq!(format!("{}", Number::Float(42.5)), "42.5");
    }

    #[test]
    fn test_number_type_checks() {
        let int = Number::Integer(42);
        assert!(int.is_integer());
        assert!(!int.is_float());
        assert_eq!(int.as_f64(), 42.0);

        let float = Number::Float(42.0);
        assert!(float.is_float());
        assert!(!float.is_integer());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::object().kind(), "object");
        assert_eq!(Value::array().kind(), "array");
        assert_eq!(Value::from("x").kind(), "string");
        assert_eq!(Value::from(1).kind(), "number");
        assert_eq!(Value::from(true).kind(), "boolean");
        assert_eq!(Value::Null.kind(), "null");
    }

    #[test]
    fn test_containers() {
        assert!(Value::object().is_container());
        assert!(Value::array().is_container());
        assert!(!Value::from("x").is_container());
        assert!(!Value::Null.is_container());
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<Value>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_vec_conversion() {
        let value = Value::from(vec!["a", "b"]);
        assert_eq!(
            value,
            Value::Array(vec![Value::from("a"), Value::from("b")])
        );
    }

    #[test]
    fn test_from_serde_json_keeps_shape() {
        let value = Value::from(json!({"a": [1, 2.5, true, null], "b": {"c": "d"}}));
        let a = value.get("a").and_then(Value::as_array).unwrap();
        assert_eq!(a[0], Value::Number(Number::Integer(1)));
        assert_eq!(a[1], Value::Number(Number::Float(2.5)));
        assert_eq!(a[2], Value::Boolean(true));
        assert_eq!(a[3], Value::Null);
        assert_eq!(
            value.get("b").and_then(|b| b.get("c")),
            Some(&Value::from("d"))
        );
    }

    #[test]
    fn test_get_on_non_object() {
        assert_eq!(Value::from("x").get("a"), None);
        assert_eq!(Value::object().get("a"), None);
    }
}
