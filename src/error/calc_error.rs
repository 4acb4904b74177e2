use thiserror::Error;

/// Result type used by the calculator and its input layer.
pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Debug, Error)]
/// Represents all errors that can occur while reading operands or computing a
/// result.
pub enum CalcError {
    /// The operator was `/` and the divisor compared equal to zero.
    #[error("MATH ERROR: Division By Zero")]
    DivisionByZero,
    /// The operator token is not one of `+`, `-`, `*` or `/`.
    #[error("UNKNOWN OPERATION {token}")]
    UnknownOperator {
        /// The token as it was read.
        token: String,
    },
    /// An operand token could not be parsed as a number.
    #[error("Invalid number: '{token}'")]
    InvalidNumber {
        /// The token as it was read.
        token: String,
    },
    /// Input ended before every prompted token was read.
    #[error("Unexpected end of input while reading {expected}")]
    UnexpectedEndOfInput {
        /// What the session was waiting for.
        expected: &'static str,
    },
    /// Reading from or writing to the console failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Returns `true` for the errors that are reported to the user as a normal
    /// part of a run rather than aborting the program.
    ///
    /// # Example
    /// ```
    /// use foundations::error::CalcError;
    ///
    /// assert!(CalcError::DivisionByZero.is_user_error());
    /// assert!(!CalcError::InvalidNumber { token: "x".into() }.is_user_error());
    /// ```
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::UnknownOperator { .. })
    }
}
