//! Core errors (no external dependencies beyond thiserror)

use thiserror::Error;

/// Access to the wrong side of an [`Outcome`](crate::Outcome).
///
/// This is a programming fault, not a domain error. `unwrap` and
/// `unwrap_err` panic with its message; `try_unwrap` and `try_unwrap_err`
/// hand it back as a value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidAccess {
    #[error("unwrap called on an error Outcome")]
    UnwrapOnErr,

    #[error("unwrap_err called on an ok Outcome")]
    UnwrapErrOnOk,
}

/// Dispatch found no command under the given name and no fallback was supplied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("command not found: {name:?}")]
pub struct CommandNotFound {
    pub name: String,
}

impl CommandNotFound {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_access_messages_name_the_call() {
        assert_eq!(
            InvalidAccess::UnwrapOnErr.to_string(),
            "unwrap called on an error Outcome"
        );
        assert_eq!(
            InvalidAccess::UnwrapErrOnOk.to_string(),
            "unwrap_err called on an ok Outcome"
        );
    }

    #[test]
    fn command_not_found_quotes_the_name() {
        let err = CommandNotFound::new("unknown_cmd");
        assert_eq!(err.to_string(), "command not found: \"unknown_cmd\"");
    }
}
