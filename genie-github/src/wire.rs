//! Wire shapes for the GitHub REST endpoints the publisher touches.

use serde::{Deserialize, Serialize};

/// Authenticated-user payload (`GET /user`), reduced to what publishing needs.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    pub login: String,
}

/// Repository-creation request (`POST /user/repos`).
#[derive(Debug, Clone, Serialize)]
pub struct CreateRepositoryRequest<'a> {
    pub name: &'a str,
    pub auto_init: bool,
    pub private: bool,
}

/// Created-repository payload, reduced to what callers report back.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Commit identity attached to every file commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitIdentity {
    pub name: String,
    pub email: String,
}

impl CommitIdentity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into() }
    }
}

/// File-commit request (`PUT /repos/{owner}/{repo}/contents/{path}`).
#[derive(Debug, Clone, Serialize)]
pub struct PutFileRequest<'a> {
    pub message: String,
    /// Base64-encoded file content.
    pub content: String,
    pub branch: &'a str,
    pub committer: &'a CommitIdentity,
    pub author: &'a CommitIdentity,
}

/// Error body GitHub attaches to non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
