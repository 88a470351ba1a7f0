use serde::{Deserialize, Serialize};

/// Claims carried by session tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

impl Claims {
    #[must_use]
    pub fn for_user(user_id: i32) -> Self {
        Self {
            user_id,
            iat: None,
            exp: None,
        }
    }
}
