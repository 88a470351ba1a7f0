//! Per-request security context.

/// Identity of the authenticated caller, inserted into request extensions by
/// the auth middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityContext {
    user_id: i32,
}

impl SecurityContext {
    #[must_use]
    pub fn for_user(user_id: i32) -> Self {
        Self { user_id }
    }

    #[inline]
    #[must_use]
    pub fn user_id(&self) -> i32 {
        self.user_id
    }
}
