/// Who is using the app right now, as far as the auth provider has told us.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user_id: Option<String>,
    pending: bool,
}

impl Session {
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            pending: false,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session restore still in flight; no user is reported until it settles.
    pub fn pending() -> Self {
        Self {
            user_id: None,
            pending: true,
        }
    }

    pub fn from_user(user_id: Option<String>) -> Self {
        match user_id.filter(|id| !id.trim().is_empty()) {
            Some(id) => Self::signed_in(id),
            None => Self::anonymous(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn user_id(&self) -> Option<&str> {
        if self.pending {
            return None;
        }
        self.user_id.as_deref()
    }
}
