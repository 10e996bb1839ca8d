//! Route table, navigation guard and navigation primitives
//!
//! Two distinct ways to move: `Router::navigate` runs the guard pipeline
//! (a soft, in-app transition), while `Navigator::redirect_to_login` is
//! the forced primitive the API client uses on 401, bypassing the guard
//! entirely so recovery works even if routing state is broken.

pub mod guard;
pub mod routes;

pub use guard::{check, GuardDecision};
pub use routes::{match_route, route_table, RouteDescriptor, DASHBOARD, LOGIN};

use crate::error::{Error, Result};
use crate::session::SessionStore;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Forced navigation, used for 401 recovery
pub trait Navigator: Send + Sync {
    /// Jump straight to the login entry point, bypassing the guard
    fn redirect_to_login(&self);
}

/// Tracks the current location and applies the guard on every navigation
pub struct Router {
    current: Arc<RwLock<&'static RouteDescriptor>>,
    session: SessionStore,
}

impl Router {
    pub fn new(session: SessionStore) -> Self {
        // The table always contains the login route
        let login = match_route(LOGIN).expect("route table misses /login");
        Self {
            current: Arc::new(RwLock::new(login)),
            session,
        }
    }

    /// Path of the route currently landed on
    pub fn current(&self) -> &'static str {
        self.current.read().unwrap_or_else(|e| e.into_inner()).path
    }

    /// Navigate through the guard pipeline.
    ///
    /// Static redirects resolve first, then the guard decides. A redirect
    /// replaces the navigation; the chain is not re-evaluated. Returns the
    /// route actually landed on.
    pub fn navigate(&self, path: &str) -> Result<&'static RouteDescriptor> {
        let mut route = match_route(path).ok_or_else(|| Error::RouteNotFound(path.to_string()))?;

        if let Some(target) = route.redirect {
            route = match_route(target).ok_or_else(|| Error::RouteNotFound(target.to_string()))?;
        }

        let landed = match check(route, &self.session) {
            GuardDecision::Allow => route,
            GuardDecision::Redirect(target) => {
                debug!(from = path, to = target, "navigation redirected");
                match_route(target).ok_or_else(|| Error::RouteNotFound(target.to_string()))?
            }
        };

        *self.current.write().unwrap_or_else(|e| e.into_inner()) = landed;
        Ok(landed)
    }

    /// Set the location directly, skipping the guard
    pub fn force(&self, path: &str) -> Result<&'static RouteDescriptor> {
        let route = match_route(path).ok_or_else(|| Error::RouteNotFound(path.to_string()))?;
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = route;
        Ok(route)
    }
}

impl Clone for Router {
    fn clone(&self) -> Self {
        Self {
            current: Arc::clone(&self.current),
            session: self.session.clone(),
        }
    }
}

impl Navigator for Router {
    fn redirect_to_login(&self) {
        // LOGIN is always in the table, so force cannot fail here
        let _ = self.force(LOGIN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStorage;

    fn router(token: Option<&str>) -> Router {
        let storage = match token {
            Some(t) => MemoryTokenStorage::with_token(t),
            None => MemoryTokenStorage::new(),
        };
        Router::new(SessionStore::new(Arc::new(storage)).unwrap())
    }

    #[test]
    fn test_dashboard_unauthenticated_lands_on_login() {
        let router = router(None);
        let landed = router.navigate(DASHBOARD).unwrap();
        assert_eq!(landed.path, LOGIN);
        assert_eq!(router.current(), LOGIN);
    }

    #[test]
    fn test_dashboard_authenticated_lands_on_dashboard() {
        let router = router(Some("tok"));
        let landed = router.navigate(DASHBOARD).unwrap();
        assert_eq!(landed.path, DASHBOARD);
    }

    #[test]
    fn test_root_redirects_to_login_then_guard_applies() {
        // Unauthenticated: static redirect to /login, guard allows
        let landed = router(None).navigate("/").unwrap();
        assert_eq!(landed.path, LOGIN);

        // Authenticated: static redirect to /login, guard bounces to dashboard
        let landed = router(Some("tok")).navigate("/").unwrap();
        assert_eq!(landed.path, DASHBOARD);
    }

    #[test]
    fn test_unknown_path_is_an_error() {
        let router = router(None);
        assert!(matches!(
            router.navigate("/nope"),
            Err(Error::RouteNotFound(_))
        ));
        // A failed navigation leaves the location unchanged
        assert_eq!(router.current(), LOGIN);
    }

    #[test]
    fn test_force_bypasses_guard() {
        let router = router(None);
        let landed = router.force(DASHBOARD).unwrap();
        assert_eq!(landed.path, DASHBOARD);
        assert_eq!(router.current(), DASHBOARD);
    }

    #[test]
    fn test_redirect_to_login_from_anywhere() {
        let router = router(Some("tok"));
        router.navigate(DASHBOARD).unwrap();
        router.redirect_to_login();
        assert_eq!(router.current(), LOGIN);
    }
}
