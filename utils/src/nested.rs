//! Key-path lookup through nested JSON objects.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NestedMapError {
    /// The key was absent at its depth, or the value at that depth was not an object.
    #[error("missing key: {key:?}")]
    MissingKey { key: String },
}

impl NestedMapError {
    /// The path segment that could not be resolved.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::MissingKey { key } => key,
        }
    }
}

/// Resolve `path` through `map`, one object level per key.
///
/// Fails on the first key that cannot be resolved, either because the current
/// value is not an object or because the object does not contain the key.
/// An empty path returns `map` itself.
pub fn access_nested_map<'a>(map: &'a Value, path: &[&str]) -> Result<&'a Value, NestedMapError> {
    path.iter().try_fold(map, |current, key| {
        current
            .as_object()
            .and_then(|object| object.get(*key))
            .ok_or_else(|| NestedMapError::MissingKey {
                key: (*key).to_string(),
            })
    })
}
