use orgkit_utils::{FetchError, NestedMapError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    MissingKey(#[from] NestedMapError),
    #[error("expected {field} to be {expected}")]
    UnexpectedShape {
        field: String,
        expected: &'static str,
    },
}

impl ClientError {
    pub(crate) fn unexpected_shape(field: impl Into<String>, expected: &'static str) -> Self {
        Self::UnexpectedShape {
            field: field.into(),
            expected,
        }
    }
}
