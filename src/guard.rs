use crate::nav::{dashboard_route, routes};
use crate::profile::Role;
use crate::store::CredentialStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Admit,
    Redirect(&'static str),
}

/// Pure admission function, total over its inputs.
///
/// No credential redirects to the login route. A signed-in user outside the
/// target's allowed set redirects to their own dashboard, never back to
/// login, which would tear down a perfectly valid session. An empty allowed
/// set admits any authenticated user.
pub fn decide(current_role: Option<Role>, allowed: &[Role]) -> GuardDecision {
    match current_role {
        None => GuardDecision::Redirect(routes::LOGIN),
        Some(role) if allowed.is_empty() || allowed.contains(&role) => GuardDecision::Admit,
        Some(role) => GuardDecision::Redirect(dashboard_route(role)),
    }
}

/// Store-reading wrapper evaluated fresh on every navigation; holds no state
/// of its own between checks.
#[derive(Clone)]
pub struct RouteGuard {
    store: CredentialStore,
}

impl RouteGuard {
    pub fn new(store: CredentialStore) -> Self {
        Self { store }
    }

    pub fn check(&self, allowed: &[Role]) -> GuardDecision {
        let current_role = self.store.profile().map(|profile| profile.role);
        decide(current_role, allowed)
    }
}
