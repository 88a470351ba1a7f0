//! Axum extractor and middleware for bearer-token auth

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::auth::{errors::AuthError, validator::TokenValidator};
use crate::security::SecurityContext;

/// Extractor for the caller's `SecurityContext`; requires `require_auth` on the route.
#[derive(Debug, Clone, Copy)]
pub struct Authz(pub SecurityContext);

impl<S> FromRequestParts<S> for Authz
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SecurityContext>()
            .copied()
            .map(Authz)
            .ok_or(AuthError::Internal(
                "SecurityContext not found - auth middleware not configured".to_owned(),
            ))
    }
}

/// Rejects the request with 401 unless it carries a valid bearer token backed
/// by a session. On success the `SecurityContext` is inserted into the request
/// extensions.
pub async fn require_auth(
    State(validator): State<Arc<dyn TokenValidator>>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = extract_bearer_token(request.headers()) else {
        return AuthError::Unauthenticated.into_response();
    };

    let ctx = match validator.validate(token).await {
        Ok(ctx) => ctx,
        Err(err) => {
            tracing::debug!(error = %err, "Rejected bearer token");
            return err.into_response();
        }
    };

    request.extensions_mut().insert(ctx);
    next.run(request).await
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::AUTHORIZATION, HeaderValue};

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn missing_header_yields_none() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn other_schemes_are_ignored() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn empty_bearer_is_ignored() {
        let headers = headers_with("Bearer ");
        assert_eq!(extract_bearer_token(&headers), None);
    }
}
