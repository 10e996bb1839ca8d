//! Session state: auth token and user profile

mod storage;
mod store;

pub use storage::{FileTokenStorage, MemoryTokenStorage, TokenStorage};
pub use store::{SessionStore, UserProfile};
