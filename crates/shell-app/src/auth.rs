//! Authentication collaborator
//!
//! Session retrieval lives outside the shell. All the shell needs is the
//! current user (for the permission set) and a redirect when there is none.

use shell_core::prelude::*;
use shell_core::User;

/// Route unauthenticated visitors are sent to
pub const SIGN_IN_ROUTE: &str = "/sign-in";

pub trait AuthProvider: Send {
    fn current_user(&self) -> Option<User>;
    fn sign_out(&mut self);
}

/// Result of guarding a protected page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated(User),
    Redirect(String),
}

/// Return the signed-in user, or a redirect to the sign-in page
pub fn require_user(auth: &dyn AuthProvider) -> AuthOutcome {
    match auth.current_user() {
        Some(user) => AuthOutcome::Authenticated(user),
        None => {
            info!("No authenticated user, redirecting to {}", SIGN_IN_ROUTE);
            AuthOutcome::Redirect(SIGN_IN_ROUTE.to_string())
        }
    }
}

/// Fixed user supplied at startup (CLI flags, tests)
#[derive(Debug, Clone, Default)]
pub struct StaticAuth {
    user: Option<User>,
}

impl StaticAuth {
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

impl AuthProvider for StaticAuth {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }

    fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!("Signed out {}", user.id);
        }
    }
}
