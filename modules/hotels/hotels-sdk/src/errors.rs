//! Public error types for the hotels module.

use thiserror::Error;

/// Errors returned to consumers of the hotels module.
///
/// Every failure the module can produce collapses into one of these three kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HotelsError {
    /// The enrollment, ticket or hotel does not exist.
    #[error("{what} not found")]
    NotFound { what: String },

    /// The caller's ticket does not grant access to hotel data.
    #[error("Ticket is not paid, is remote or does not include hotel")]
    PaymentRequired,

    /// Anything else, storage failures included.
    #[error("{message}")]
    Unexpected { message: String },
}

impl HotelsError {
    #[must_use]
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    #[must_use]
    pub fn payment_required() -> Self {
        Self::PaymentRequired
    }

    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_displays_raw_message() {
        let err = HotelsError::unexpected("connection reset by peer");
        assert_eq!(err.to_string(), "connection reset by peer");
    }

    #[test]
    fn not_found_names_the_missing_record() {
        assert_eq!(HotelsError::not_found("Hotel").to_string(), "Hotel not found");
    }
}
