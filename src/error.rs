use thiserror::Error;

use crate::token::TypeToken;

/// Error raised by the checked, value-returning cast paths.
///
/// Signals that extraction was attempted against a container that is empty
/// or holds a different type. Carries a human-readable diagnostic naming the
/// requested type and what the container actually held.
///
/// Only the checked paths produce this error; the `Option`-returning forms
/// report the same conditions as `None`, and the unchecked forms perform no
/// validation at all.
///
/// # Examples
///
/// ```
/// use anycell::{cast, AnyValue};
///
/// let value = AnyValue::new(42i32);
/// let err = cast::<String>(&value).unwrap_err();
/// assert!(err.message().contains("i32"));
/// ```
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct BadAnyCast {
    message: String,
}

impl BadAnyCast {
    /// The container held a value of a different type.
    pub(crate) fn mismatch(requested: TypeToken, held: TypeToken) -> Self {
        Self {
            message: format!(
                "bad any cast: requested `{}`, container holds `{}`",
                requested, held
            ),
        }
    }

    /// The container was empty.
    pub(crate) fn empty(requested: TypeToken) -> Self {
        Self {
            message: format!("bad any cast: requested `{}`, container is empty", requested),
        }
    }

    /// The diagnostic message, identical to the `Display` rendering.
    pub fn message(&self) -> &str {
        &self.message
    }
}
