//! Wire models for the requirements document API
//!
//! Timestamps stay as the backend's ISO strings; the client only ever
//! displays them.

use crate::session::UserProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a requirement.
///
/// The backend is not consistent here: the schema documents draft,
/// in_progress and completed, but the create endpoint stamps new
/// requirements as active. Unrecognized statuses must not reject an
/// otherwise valid response, so there is a catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementStatus {
    Draft,
    Active,
    InProgress,
    Completed,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for RequirementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequirementStatus::Draft => write!(f, "draft"),
            RequirementStatus::Active => write!(f, "active"),
            RequirementStatus::InProgress => write!(f, "in_progress"),
            RequirementStatus::Completed => write!(f, "completed"),
            RequirementStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Accept an id as either a JSON number or a numeric string; the create
/// endpoint echoes the JWT identity, which arrives as a string
fn i64_or_string<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// A requirement task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requirement {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "i64_or_string")]
    pub creator_id: i64,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    pub status: RequirementStatus,
    /// The caller's role on this requirement (owner or member); only
    /// present in list responses
    #[serde(default)]
    pub role: Option<String>,
}

/// One generated version of a requirement document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentVersion {
    pub id: i64,
    pub requirement_id: String,
    pub version: u32,
    pub content: String,
    // The list endpoint labels this created_at, the detail endpoint
    // generated_at
    #[serde(default, alias = "created_at")]
    pub generated_at: Option<String>,
}

/// Result of a generate-document call
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedDocument {
    pub message: String,
    pub document: String,
    pub version: u32,
}

/// Result of a successful login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserProfile,
}

/// A user participating in a requirement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub username: String,
    pub role: String,
}

/// Result of inviting users to a requirement
#[derive(Debug, Clone, Deserialize)]
pub struct InviteResult {
    pub message: String,
    pub invited_users: Vec<UserProfile>,
}
