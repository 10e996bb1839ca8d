//! reqdoc - Terminal client for the requirements document service
//!
//! This is the library interface for reqdoc, exposing the session store,
//! route guard and API client for programmatic use.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod router;
pub mod session;

pub use client::ApiClient;
pub use config::Config;
pub use error::Error;
pub use session::SessionStore;
