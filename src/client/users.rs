//! User account operations

use crate::client::models::LoginResponse;
use crate::client::ApiClient;
use crate::error::Result;
use crate::session::UserProfile;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct ProfileEnvelope {
    user: UserProfile,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

impl ApiClient {
    /// Exchange credentials for an access token.
    ///
    /// Pass-through dispatch: storing the returned token in the session
    /// is the caller's decision, not the client's.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = json!({ "email": email, "password": password });
        let response = self.post_json("/users/login", &body).await?;
        Ok(response.json().await?)
    }

    /// Create an account; returns the backend's confirmation message
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<String> {
        let body = json!({ "username": username, "email": email, "password": password });
        let response = self.post_json("/users/register", &body).await?;
        let msg: MessageBody = response.json().await?;
        Ok(msg.message)
    }

    /// Profile of the currently authenticated user
    pub async fn profile(&self) -> Result<UserProfile> {
        let response = self.get("/users/profile").await?;
        let envelope: ProfileEnvelope = response.json().await?;
        Ok(envelope.user)
    }

    /// Look up a user by exact email, e.g. to resolve an invitee's id
    pub async fn user_by_email(&self, email: &str) -> Result<UserProfile> {
        let response = self.get(&format!("/users/email/{email}")).await?;
        let envelope: ProfileEnvelope = response.json().await?;
        Ok(envelope.user)
    }
}
