//! Authenticated API client
//!
//! All outbound calls go through one dispatch path: request interceptors
//! run before the wire, response interceptors run before the caller sees
//! the result. Nothing bypasses the pipeline.

mod http;
mod interceptor;
mod models;
mod requirements;
mod users;

pub use http::ApiClient;
pub use interceptor::{
    BearerAuth, CacheBust, RequestId, RequestInterceptor, ResponseInterceptor,
    UnauthorizedRedirect,
};
pub use models::{
    DocumentVersion, GeneratedDocument, InviteResult, LoginResponse, Participant, Requirement,
    RequirementStatus,
};
