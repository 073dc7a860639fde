//! Key path string parser.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::ast::{KeyPath, Segment, SegmentType};
use super::error::KeyPathError;

/// How unrecognized type annotations are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Unknown or empty annotations are rejected.
    #[default]
    Strict,
    /// Unknown or empty annotations fall back to `Object` (legacy behavior).
    Lenient,
}

/// Parser for key path strings.
pub struct Parser {
    input: String,
    mode: ParseMode,
}

impl Parser {
    /// Creates a new parser for the given path string.
    pub fn new(path: &str, mode: ParseMode) -> Self {
        Self {
            input: path.to_string(),
            mode,
        }
    }

    /// Parses the path string in strict mode.
    pub fn parse(path: &str) -> Result<KeyPath, KeyPathError> {
        Parser::new(path, ParseMode::Strict).parse_path()
    }

    /// Parses the path string in lenient mode.
    pub fn parse_lenient(path: &str) -> Result<KeyPath, KeyPathError> {
        Parser::new(path, ParseMode::Lenient).parse_path()
    }

    /// Parses the path string with an explicit mode.
    pub fn parse_with_mode(path: &str, mode: ParseMode) -> Result<KeyPath, KeyPathError> {
        Parser::new(path, mode).parse_path()
    }

    fn parse_path(&self) -> Result<KeyPath, KeyPathError> {
        if self.input.is_empty() {
            return Err(KeyPathError::EmptyPath);
        }

        let segments = self
            .input
            .split('.')
            .map(|raw| self.parse_segment(raw))
            .collect::<Result<Vec<_>, _>>()?;

        trace!(path = %self.input, segments = segments.len(), mode = ?self.mode, "parsed key path");
        Ok(KeyPath::new(segments))
    }

    /// Parses one `key[:type]` segment, splitting on the first ':'.
    fn parse_segment(&self, raw: &str) -> Result<Segment, KeyPathError> {
        let (key, token) = match raw.split_once(':') {
            Some((key, token)) => (key, Some(token)),
            None => (raw, None),
        };

        if key.is_empty() {
            return Err(KeyPathError::InvalidSegment {
                segment: raw.to_string(),
            });
        }

        let kind = match token {
            None => SegmentType::Object,
            Some(token) => self.resolve_type(token, raw)?,
        };

        Ok(Segment::new(key, kind))
    }

    fn resolve_type(&self, token: &str, raw: &str) -> Result<SegmentType, KeyPathError> {
        match (SegmentType::try_from(token), self.mode) {
            (Ok(kind), _) => Ok(kind),
            (Err(()), ParseMode::Lenient) => Ok(SegmentType::Object),
            (Err(()), ParseMode::Strict) => Err(KeyPathError::UnsupportedSegmentType {
                token: token.to_string(),
                segment: raw.to_string(),
            }),
        }
    }
}
