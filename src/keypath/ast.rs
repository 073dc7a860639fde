//! Segment types for typed key paths.

use std::{fmt, str::FromStr};

use super::error::KeyPathError;
use super::parser::Parser;

/// The type annotation carried by a segment.
///
/// `Object` and `Array` are structural: they decide what container lives at a
/// key. `String`, `Number` and `Boolean` only describe the leaf value and are
/// never checked against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentType {
    Object,
    Array,
    String,
    Number,
    Boolean,
}

impl SegmentType {
    /// Returns true for `Object` and `Array`.
    pub fn is_structural(self) -> bool {
        matches!(self, SegmentType::Object | SegmentType::Array)
    }

    /// Returns true for `String`, `Number` and `Boolean`.
    pub fn is_leaf(self) -> bool {
        !self.is_structural()
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentType::Object => write!(f, "object"),
            SegmentType::Array => write!(f, "array"),
            SegmentType::String => write!(f, "string"),
            SegmentType::Number => write!(f, "number"),
            SegmentType::Boolean => write!(f, "boolean"),
        }
    }
}

impl TryFrom<&str> for SegmentType {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "array" => Ok(SegmentType::Array),
            "obj" | "object" => Ok(SegmentType::Object),
            "string" => Ok(SegmentType::String),
            "number" => Ok(SegmentType::Number),
            "boolean" => Ok(SegmentType::Boolean),
            _ => Err(()),
        }
    }
}

/// One `key[:type]` unit of a key path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Field name, never empty.
    pub key: String,
    /// Declared type of the field.
    pub kind: SegmentType,
}

impl Segment {
    /// Creates a segment with the given key and type.
    pub fn new(key: impl Into<String>, kind: SegmentType) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    /// Returns true if this segment is typed `Array`.
    pub fn is_array(&self) -> bool {
        self.kind == SegmentType::Array
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.kind)
    }
}

/// A parsed key path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    /// Segments in navigation order.
    pub segments: Vec<Segment>,
}

impl KeyPath {
    /// Creates a key path from already-built segments.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the index of the rightmost `Array` segment, if any.
    ///
    /// ```
    /// use objquill::keypath::Parser;
    ///
    /// let path = Parser::parse("a:array.b:object.c:array.d:string").unwrap();
    /// assert_eq!(path.pivot(), Some(2));
    ///
    /// let path = Parser::parse("a:object.b:string").unwrap();
    /// assert_eq!(path.pivot(), None);
    /// ```
    pub fn pivot(&self) -> Option<usize> {
        self.segments.iter().rposition(Segment::is_array)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for KeyPath {
    type Err = KeyPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::parse(s)
    }
}
