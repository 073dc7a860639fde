//! Error types for building documents from key paths.

use std::fmt;

use crate::keypath::KeyPathError;

/// Errors that can occur while applying a key path to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The path could not be parsed.
    Path(KeyPathError),
    /// The root, or a value the path has to pass through, is not an object.
    ///
    /// `key` is `None` when the root itself is the problem.
    InvalidTarget {
        key: Option<String>,
        found: &'static str,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Path(err) => write!(f, "{}", err),
            BuildError::InvalidTarget { key: None, found } => {
                write!(f, "Target object must be a valid object, found {}", found)
            }
            BuildError::InvalidTarget {
                key: Some(key),
                found,
            } => write!(
                f,
                "Cannot descend into \"{}\": expected object, found {}",
                key, found
            ),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Path(err) => Some(err),
            BuildError::InvalidTarget { .. } => None,
        }
    }
}

impl From<KeyPathError> for BuildError {
    fn from(err: KeyPathError) -> Self {
        BuildError::Path(err)
    }
}
