//! Bearer-token authentication.
//!
//! Tokens are HS256 JWTs carrying a `userId` claim. A token is accepted only
//! while a session row holding exactly that token exists.

pub mod axum_ext;
pub mod claims;
pub mod errors;
pub mod validator;

pub use axum_ext::{require_auth, Authz};
pub use claims::Claims;
pub use errors::AuthError;
pub use validator::{JwtSessionValidator, SessionStore, TokenValidator};
