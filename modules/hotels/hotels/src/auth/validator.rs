use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::auth::claims::Claims;
use crate::auth::errors::AuthError;
use crate::security::SecurityContext;

/// Validates a bearer token and resolves the caller.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// # Errors
    /// `AuthError` describing why the token was rejected.
    async fn validate(&self, token: &str) -> Result<SecurityContext, AuthError>;
}

/// Read access to the sessions table.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Whether a session holding exactly `token` exists.
    ///
    /// # Errors
    /// Storage failures.
    async fn has_session(&self, token: &str) -> anyhow::Result<bool>;
}

/// Verifies the JWT signature with a shared secret, then requires a live session.
pub struct JwtSessionValidator {
    key: DecodingKey,
    validation: Validation,
    sessions: Arc<dyn SessionStore>,
}

impl JwtSessionValidator {
    #[must_use]
    pub fn new(secret: &str, leeway_seconds: u64, sessions: Arc<dyn SessionStore>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_seconds;
        validation.validate_exp = true;
        validation.validate_aud = false;

        // Session tokens are not required to carry `exp`; it is checked when present.
        let empty_claims: &[&str] = &[];
        validation.set_required_spec_claims(empty_claims);

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            sessions,
        }
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.key, &self.validation)?;
        Ok(data.claims)
    }
}

#[async_trait]
impl TokenValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<SecurityContext, AuthError> {
        let claims = self.decode_claims(token)?;

        let active = self
            .sessions
            .has_session(token)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        if !active {
            tracing::debug!(user_id = claims.user_id, "Token has no session");
            return Err(AuthError::SessionNotFound);
        }

        Ok(SecurityContext::for_user(claims.user_id))
    }
}
