//! The one error the fixture detects.

use libc::c_int;
use thiserror::Error;

/// Exit status of a run that returns normally.
pub const SUCCESS_STATUS: c_int = 0;

/// Exit status of an invocation without an argument.
pub const USAGE_ERROR_STATUS: c_int = 1;

/// An invalid invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UsageError {
    /// No argument followed the program name.
    #[error("Error - missing argument")]
    MissingArgument,
}

impl UsageError {
    /// The process exit status that reports this error.
    pub const fn exit_status(self) -> c_int {
        match self {
            Self::MissingArgument => USAGE_ERROR_STATUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument() {
        let err = UsageError::MissingArgument;
        assert_eq!(err.to_string(), "Error - missing argument");
        assert_eq!(err.exit_status(), 1);
        assert_ne!(err.exit_status(), SUCCESS_STATUS);
    }
}
