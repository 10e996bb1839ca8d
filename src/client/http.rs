//! Core HTTP dispatch

use crate::client::interceptor::{
    BearerAuth, CacheBust, RequestId, RequestInterceptor, ResponseInterceptor,
    UnauthorizedRedirect,
};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::router::Navigator;
use crate::session::SessionStore;
use reqwest::header::HeaderMap;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client for the requirements document API.
///
/// Every request goes out relative to the configured base path with the
/// full interceptor pipeline applied; 401 handling happens here, before
/// the caller ever sees the response.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    request_interceptors: Vec<Box<dyn RequestInterceptor>>,
    response_interceptors: Vec<Box<dyn ResponseInterceptor>>,
}

impl ApiClient {
    /// Build a client over the given session and forced-navigation handle
    pub fn new(
        config: &ApiConfig,
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_interceptors: vec![
                Box::new(CacheBust),
                Box::new(RequestId),
                Box::new(BearerAuth::new(session.clone())),
            ],
            response_interceptors: vec![Box::new(UnauthorizedRedirect::new(session, navigator))],
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET through the pipeline, mapping non-success statuses to errors
    pub async fn get(&self, path: &str) -> Result<Response> {
        let response = self.dispatch(self.http.get(self.url(path))).await?;
        Self::check_status(response).await
    }

    /// POST a JSON body through the pipeline
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Response> {
        let response = self
            .dispatch(self.http.post(self.url(path)).json(body))
            .await?;
        Self::check_status(response).await
    }

    /// POST with no body through the pipeline
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        let response = self.dispatch(self.http.post(self.url(path))).await?;
        Self::check_status(response).await
    }

    /// Run the interceptor pipeline around a single dispatch.
    ///
    /// Header injection completes before the request hits the wire; the
    /// response hooks complete before the result is returned. A rejected
    /// pre-dispatch hook fails the request without touching the session.
    async fn dispatch(&self, request: RequestBuilder) -> Result<Response> {
        let mut headers = HeaderMap::new();
        for hook in &self.request_interceptors {
            hook.before_dispatch(&mut headers)?;
        }

        let result = request.headers(headers).send().await;

        let status = match &result {
            Ok(response) => Some(response.status()),
            Err(e) => e.status(),
        };
        for hook in &self.response_interceptors {
            hook.after_dispatch(status);
        }

        let response = result?;
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized);
        }
        Ok(response)
    }

    /// Map non-success statuses to `Error::Api`, using the backend's
    /// `{"message": ...}` envelope when one is present
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        debug!(status = status.as_u16(), "request failed");
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }
}
