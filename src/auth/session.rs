use tokio::sync::watch;

use super::{Identity, IdentityProvider};

/// Explicit session context handed to every component that needs to
/// know who is signed in; derived from the provider's watch channel,
/// so it always reflects the latest auth state.
#[derive(Clone)]
pub struct Session {
    state: watch::Receiver<Option<Identity>>,
    admin_email: String,
}

impl Session {
    pub fn new(provider: &dyn IdentityProvider, admin_email: impl Into<String>) -> Self {
        Self {
            state: provider.watch(),
            admin_email: admin_email.into(),
        }
    }

    pub fn current(&self) -> Option<Identity> {
        self.state.borrow().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Admin capability: the signed-in email matches the configured
    /// admin email (case-insensitive). An empty configuration grants
    /// nobody.
    pub fn is_admin(&self) -> bool {
        if self.admin_email.is_empty() {
            return false;
        }
        self.state
            .borrow()
            .as_ref()
            .is_some_and(|identity| identity.email.eq_ignore_ascii_case(&self.admin_email))
    }
}
