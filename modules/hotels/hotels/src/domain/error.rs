use hotels_sdk::HotelsError;
use thiserror::Error;

use crate::domain::eligibility::Ineligibility;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Enrollment not found for user {user_id}")]
    EnrollmentNotFound { user_id: i32 },

    #[error("Ticket not found for enrollment {enrollment_id}")]
    TicketNotFound { enrollment_id: i32 },

    #[error("Hotel not found: {id}")]
    HotelNotFound { id: i32 },

    #[error("Hotel access denied: {reason}")]
    PaymentRequired { reason: Ineligibility },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    #[must_use]
    pub fn enrollment_not_found(user_id: i32) -> Self {
        Self::EnrollmentNotFound { user_id }
    }

    #[must_use]
    pub fn ticket_not_found(enrollment_id: i32) -> Self {
        Self::TicketNotFound { enrollment_id }
    }

    #[must_use]
    pub fn hotel_not_found(id: i32) -> Self {
        Self::HotelNotFound { id }
    }

    #[must_use]
    pub fn payment_required(reason: Ineligibility) -> Self {
        Self::PaymentRequired { reason }
    }

    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::database(e.to_string())
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for HotelsError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::EnrollmentNotFound { .. } => HotelsError::not_found("Enrollment"),
            DomainError::TicketNotFound { .. } => HotelsError::not_found("Ticket"),
            DomainError::HotelNotFound { .. } => HotelsError::not_found("Hotel"),
            DomainError::PaymentRequired { .. } => HotelsError::payment_required(),
            e @ DomainError::Database { .. } => HotelsError::unexpected(e.to_string()),
        }
    }
}
