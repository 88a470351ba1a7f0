use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration of the hotels module (`hotels` section of the app config).
#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HotelsConfig {
    /// HMAC secret used to verify HS256 bearer tokens.
    pub jwt_secret: String,

    /// Clock skew tolerated when checking `exp`, in seconds.
    #[serde(default)]
    pub token_leeway_seconds: u64,

    /// Serve the generated `OpenAPI` document at `/openapi.json`.
    #[serde(default)]
    pub enable_docs: bool,
}

impl fmt::Debug for HotelsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HotelsConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_leeway_seconds", &self.token_leeway_seconds)
            .field("enable_docs", &self.enable_docs)
            .finish()
    }
}
