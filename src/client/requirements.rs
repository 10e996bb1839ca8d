//! Requirement and document operations

use crate::client::models::{
    DocumentVersion, GeneratedDocument, InviteResult, Participant, Requirement,
};
use crate::client::ApiClient;
use crate::error::Result;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
struct RequirementList {
    requirements: Vec<Requirement>,
}

#[derive(Debug, Deserialize)]
struct RequirementEnvelope {
    requirement: Requirement,
}

#[derive(Debug, Deserialize)]
struct ParticipantList {
    participants: Vec<Participant>,
}

#[derive(Debug, Deserialize)]
struct DocumentList {
    documents: Vec<DocumentVersion>,
}

#[derive(Debug, Deserialize)]
struct DocumentEnvelope {
    document: DocumentVersion,
}

impl ApiClient {
    /// All requirements the current user participates in
    pub async fn list_requirements(&self) -> Result<Vec<Requirement>> {
        let response = self.get("/requirements/list").await?;
        let list: RequirementList = response.json().await?;
        Ok(list.requirements)
    }

    /// A single requirement by id
    pub async fn get_requirement(&self, requirement_id: &str) -> Result<Requirement> {
        let response = self.get(&format!("/requirements/{requirement_id}")).await?;
        let envelope: RequirementEnvelope = response.json().await?;
        Ok(envelope.requirement)
    }

    /// Create a requirement; the creator becomes its owner
    pub async fn create_requirement(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> Result<Requirement> {
        let body = json!({ "title": title, "description": description });
        let response = self.post_json("/requirements/create", &body).await?;
        let envelope: RequirementEnvelope = response.json().await?;
        Ok(envelope.requirement)
    }

    /// Invite users onto a requirement; only the creator may invite.
    /// Unknown ids and existing members are skipped server-side.
    pub async fn invite_members(
        &self,
        requirement_id: &str,
        user_ids: &[i64],
    ) -> Result<InviteResult> {
        let body = json!({ "user_ids": user_ids });
        let response = self
            .post_json(&format!("/requirements/{requirement_id}/invite"), &body)
            .await?;
        Ok(response.json().await?)
    }

    /// All users participating in a requirement, with their roles
    pub async fn get_participants(&self, requirement_id: &str) -> Result<Vec<Participant>> {
        let response = self
            .get(&format!("/requirements/{requirement_id}/participants"))
            .await?;
        let list: ParticipantList = response.json().await?;
        Ok(list.participants)
    }

    /// Generate a new document version from the requirement's contents.
    /// Long-running on the server side; bounded only by the client timeout.
    pub async fn generate_document(&self, requirement_id: &str) -> Result<GeneratedDocument> {
        info!(requirement_id, "generating document");
        let response = self
            .post_empty(&format!("/requirements/{requirement_id}/generate-document"))
            .await?;
        Ok(response.json().await?)
    }

    /// Export the latest document as PDF. The payload is an opaque byte
    /// stream; it is never parsed as text or JSON.
    pub async fn export_pdf(&self, requirement_id: &str) -> Result<Vec<u8>> {
        let response = self
            .get(&format!("/requirements/{requirement_id}/export-pdf"))
            .await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Version metadata for all generated documents of a requirement
    pub async fn list_document_versions(
        &self,
        requirement_id: &str,
    ) -> Result<Vec<DocumentVersion>> {
        let response = self
            .get(&format!("/requirements/{requirement_id}/documents"))
            .await?;
        let list: DocumentList = response.json().await?;
        Ok(list.documents)
    }

    /// A specific document version's content
    pub async fn get_document_version(
        &self,
        requirement_id: &str,
        version: u32,
    ) -> Result<DocumentVersion> {
        let response = self
            .get(&format!("/requirements/{requirement_id}/documents/{version}"))
            .await?;
        let envelope: DocumentEnvelope = response.json().await?;
        Ok(envelope.document)
    }
}
