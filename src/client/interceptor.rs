//! Request and response interceptors
//!
//! Request interceptors may mutate the outgoing headers or reject the
//! request before dispatch; rejection never touches session state.
//! Response interceptors observe the carried status (if any) before the
//! result is handed back to the caller.

use crate::error::Result;
use crate::router::Navigator;
use crate::session::SessionStore;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::{debug, warn};

/// Pre-dispatch hook; runs in order before every outbound request
pub trait RequestInterceptor: Send + Sync {
    fn before_dispatch(&self, headers: &mut HeaderMap) -> Result<()>;
}

/// Post-dispatch hook; runs in order after every response or failure.
/// `status` is `None` for transport errors that carry no status code.
pub trait ResponseInterceptor: Send + Sync {
    fn after_dispatch(&self, status: Option<StatusCode>);
}

/// Disables intermediary and client caching on every request
pub struct CacheBust;

impl RequestInterceptor for CacheBust {
    fn before_dispatch(&self, headers: &mut HeaderMap) -> Result<()> {
        headers.insert(
            "Cache-Control",
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        );
        headers.insert("Pragma", HeaderValue::from_static("no-cache"));
        headers.insert("Expires", HeaderValue::from_static("0"));
        Ok(())
    }
}

/// Tags every request with a unique id for log correlation
pub struct RequestId;

impl RequestInterceptor for RequestId {
    fn before_dispatch(&self, headers: &mut HeaderMap) -> Result<()> {
        let id = uuid::Uuid::new_v4().to_string();
        headers.insert("X-Request-Id", HeaderValue::from_str(&id)?);
        Ok(())
    }
}

/// Attaches `Authorization: Bearer <token>` when the session has a token
pub struct BearerAuth {
    session: SessionStore,
}

impl BearerAuth {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }
}

impl RequestInterceptor for BearerAuth {
    fn before_dispatch(&self, headers: &mut HeaderMap) -> Result<()> {
        if let Some(token) = self.session.token() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(())
    }
}

/// Recovers from 401 responses: clears the session and forces a redirect
/// to the login entry point. Runs exactly once per unauthorized response;
/// every other outcome leaves the session untouched.
pub struct UnauthorizedRedirect {
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl UnauthorizedRedirect {
    pub fn new(session: SessionStore, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }
}

impl ResponseInterceptor for UnauthorizedRedirect {
    fn after_dispatch(&self, status: Option<StatusCode>) {
        if status != Some(StatusCode::UNAUTHORIZED) {
            return;
        }
        debug!("received 401, clearing session");
        if let Err(e) = self.session.logout() {
            warn!("failed to clear persisted token: {}", e);
        }
        self.navigator.redirect_to_login();
    }
}
