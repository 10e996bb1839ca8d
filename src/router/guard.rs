//! Navigation guard
//!
//! Evaluated fresh on every navigation attempt; never cached.

use crate::router::routes::{RouteDescriptor, DASHBOARD, LOGIN};
use crate::session::SessionStore;

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed to the requested route
    Allow,
    /// Replace the navigation with the given path
    Redirect(&'static str),
}

/// Decide whether a navigation to `to` may proceed.
///
/// Protected routes require an authenticated session; an authenticated
/// user is kept away from the login form.
pub fn check(to: &RouteDescriptor, session: &SessionStore) -> GuardDecision {
    if to.requires_auth {
        if session.is_authenticated() {
            GuardDecision::Allow
        } else {
            GuardDecision::Redirect(LOGIN)
        }
    } else if to.path == LOGIN && session.is_authenticated() {
        GuardDecision::Redirect(DASHBOARD)
    } else {
        GuardDecision::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::routes::match_route;
    use crate::session::MemoryTokenStorage;
    use std::sync::Arc;

    fn session(token: Option<&str>) -> SessionStore {
        let storage = match token {
            Some(t) => MemoryTokenStorage::with_token(t),
            None => MemoryTokenStorage::new(),
        };
        SessionStore::new(Arc::new(storage)).unwrap()
    }

    #[test]
    fn test_protected_route_unauthenticated_redirects_to_login() {
        let to = match_route(DASHBOARD).unwrap();
        assert_eq!(check(to, &session(None)), GuardDecision::Redirect(LOGIN));
    }

    #[test]
    fn test_protected_route_authenticated_allows() {
        let to = match_route(DASHBOARD).unwrap();
        assert_eq!(check(to, &session(Some("tok"))), GuardDecision::Allow);

        let detail = match_route("/requirement/42").unwrap();
        assert_eq!(check(detail, &session(Some("tok"))), GuardDecision::Allow);
    }

    #[test]
    fn test_login_while_authenticated_redirects_to_dashboard() {
        let to = match_route(LOGIN).unwrap();
        assert_eq!(
            check(to, &session(Some("tok"))),
            GuardDecision::Redirect(DASHBOARD)
        );
    }

    #[test]
    fn test_login_while_unauthenticated_allows() {
        let to = match_route(LOGIN).unwrap();
        assert_eq!(check(to, &session(None)), GuardDecision::Allow);
    }

    #[test]
    fn test_public_route_always_allows() {
        let to = match_route("/register").unwrap();
        assert_eq!(check(to, &session(None)), GuardDecision::Allow);
        assert_eq!(check(to, &session(Some("tok"))), GuardDecision::Allow);
    }
}
