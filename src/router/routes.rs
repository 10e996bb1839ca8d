//! Static route table

/// The login entry point; 401 recovery always lands here
pub const LOGIN: &str = "/login";
/// Landing page for authenticated users
pub const DASHBOARD: &str = "/dashboard";

/// A route known to the application, defined at startup and immutable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Path pattern; a `:name` segment matches any single segment
    pub path: &'static str,
    /// Route name
    pub name: &'static str,
    /// Whether navigation requires an authenticated session
    pub requires_auth: bool,
    /// Static redirect target, resolved before the guard runs
    pub redirect: Option<&'static str>,
}

const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: "/",
        name: "root",
        requires_auth: false,
        redirect: Some(LOGIN),
    },
    RouteDescriptor {
        path: LOGIN,
        name: "login",
        requires_auth: false,
        redirect: None,
    },
    RouteDescriptor {
        path: "/register",
        name: "register",
        requires_auth: false,
        redirect: None,
    },
    RouteDescriptor {
        path: DASHBOARD,
        name: "dashboard",
        requires_auth: true,
        redirect: None,
    },
    RouteDescriptor {
        path: "/requirement/:id",
        name: "requirement-detail",
        requires_auth: true,
        redirect: None,
    },
];

/// All routes known to the application
pub fn route_table() -> &'static [RouteDescriptor] {
    ROUTES
}

/// Match a concrete path against the route table
pub fn match_route(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| matches(route.path, path))
}

fn matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = pattern.trim_matches('/').split('/');
    let mut path_segments = path.trim_matches('/').split('/');

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(p), Some(s)) if p.starts_with(':') => {
                if s.is_empty() {
                    return false;
                }
            }
            (Some(p), Some(s)) if p == s => {}
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_paths_match() {
        assert_eq!(match_route("/login").unwrap().name, "login");
        assert_eq!(match_route("/dashboard").unwrap().name, "dashboard");
        assert_eq!(match_route("/").unwrap().name, "root");
    }

    #[test]
    fn test_param_segment_matches_any_id() {
        let route = match_route("/requirement/42").unwrap();
        assert_eq!(route.name, "requirement-detail");
        assert!(route.requires_auth);

        let uuid = match_route("/requirement/550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(uuid.name, "requirement-detail");
    }

    #[test]
    fn test_unknown_paths_do_not_match() {
        assert!(match_route("/admin").is_none());
        assert!(match_route("/requirement").is_none());
        assert!(match_route("/requirement/42/extra").is_none());
    }

    #[test]
    fn test_table_invariants() {
        let table = route_table();

        for (i, route) in table.iter().enumerate() {
            // Paths are unique
            assert!(
                table.iter().skip(i + 1).all(|other| other.path != route.path),
                "duplicate path {}",
                route.path
            );
            // Every redirect target resolves and does not chain further
            if let Some(target) = route.redirect {
                let target_route = match_route(target).expect("redirect target must resolve");
                assert!(target_route.redirect.is_none());
            }
        }

        // The guard's two fixed destinations are always present
        assert!(table.iter().any(|r| r.path == LOGIN && !r.requires_auth));
        assert!(table.iter().any(|r| r.path == DASHBOARD && r.requires_auth));
    }

    #[test]
    fn test_auth_flags() {
        assert!(!match_route("/login").unwrap().requires_auth);
        assert!(!match_route("/register").unwrap().requires_auth);
        assert!(match_route("/dashboard").unwrap().requires_auth);
    }
}
