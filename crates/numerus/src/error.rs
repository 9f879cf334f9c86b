//! Error types for Roman numeral conversion.
//!
//! Errors fall into two classes that callers are expected to handle
//! differently:
//!
//! - Domain errors ([`Error::InvalidRange`], [`Error::OutOfRange`]) are detected
//!   before any work is scheduled and describe a bad request.
//! - Infrastructure errors ([`Error::Dispatch`]) surface while awaiting chunk
//!   tasks and describe a failure of the worker pool itself.
//!
//! Use [`Error::is_client_error`] to tell them apart and [`Error::code`] for a
//! stable machine-readable identifier.

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `numerus` can emit.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The lower bound is greater than the upper bound.
    #[error("Min must be less than or equal to max (min={min}, max={max})")]
    InvalidRange { min: i32, max: i32 },

    /// At least one bound lies outside the encodable domain.
    #[error("Numbers must be between 1 and 3999 (min={min}, max={max})")]
    OutOfRange { min: i32, max: i32 },

    /// A chunk task failed to run to completion (panic, cancellation or
    /// runtime shutdown).
    #[error("Dispatch error: {context}")]
    Dispatch { context: String },
}

impl Error {
    /// Stable code identifying the error class.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } => "INVALID_RANGE",
            Self::OutOfRange { .. } => "OUT_OF_RANGE",
            Self::Dispatch { .. } => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Returns `true` when the error was caused by the caller's input rather
    /// than by the conversion machinery.
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRange { .. } | Self::OutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_client_errors() {
        assert!(Error::InvalidRange { min: 5, max: 1 }.is_client_error());
        assert!(Error::OutOfRange { min: 0, max: 10 }.is_client_error());
        assert!(
            !Error::Dispatch {
                context: "boom".to_string()
            }
            .is_client_error()
        );
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(Error::InvalidRange { min: 2, max: 1 }.code(), "INVALID_RANGE");
        assert_eq!(Error::OutOfRange { min: 0, max: 1 }.code(), "OUT_OF_RANGE");
        assert_eq!(
            Error::Dispatch {
                context: String::new()
            }
            .code(),
            "INTERNAL_SERVER_ERROR"
        );
    }
}
