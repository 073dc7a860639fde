//! Error types for key path parsing.

use std::fmt;

/// Errors that can occur while parsing a key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPathError {
    /// The path string was empty.
    EmptyPath,
    /// A segment has no key before its type annotation.
    InvalidSegment { segment: String },
    /// A type annotation is present but not recognized.
    UnsupportedSegmentType { token: String, segment: String },
}

impl fmt::Display for KeyPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPathError::EmptyPath => write!(f, "Path cannot be empty"),
            KeyPathError::InvalidSegment { segment } => {
                write!(f, "Invalid path segment: \"{}\"", segment)
            }
            KeyPathError::UnsupportedSegmentType { token, segment } => write!(
                f,
                "Unsupported segment type: \"{}\" in segment \"{}\"",
                token, segment
            ),
        }
    }
}

impl std::error::Error for KeyPathError {}
