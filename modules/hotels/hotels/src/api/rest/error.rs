use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hotels_sdk::HotelsError;

use crate::domain::error::DomainError;

/// REST-facing error. Bodies are plain text.
#[derive(Debug)]
pub struct ApiError(pub HotelsError);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<HotelsError> for ApiError {
    fn from(e: HotelsError) -> Self {
        Self(e)
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e.into())
    }
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self.0 {
            HotelsError::NotFound { .. } => StatusCode::NOT_FOUND,
            HotelsError::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
            HotelsError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.0 {
            HotelsError::NotFound { .. } | HotelsError::PaymentRequired => {
                let reason = status.canonical_reason().unwrap_or_default();
                (status, reason).into_response()
            }
            HotelsError::Unexpected { message } => {
                tracing::error!(error = %message, "Hotels request failed");
                (status, message).into_response()
            }
        }
    }
}
