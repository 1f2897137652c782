//! Minimal GitHub REST client covering the publish flow.

use crate::wire::{
    AuthenticatedUser, CommitIdentity, CreateRepositoryRequest, GithubErrorBody, PutFileRequest,
    Repository,
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};
use genie_core::{FlattenedFile, GenieError, Result};
use reqwest::{Client, Response, StatusCode, Url};

/// Default GitHub API base URL.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

const ACCEPT_HEADER: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("repo-genie/", env!("CARGO_PKG_VERSION"));

/// Token-authenticated GitHub client.
///
/// Covers exactly the three endpoints publishing needs: identity lookup,
/// repository creation, and the contents API for single-file commits.
pub struct GithubClient {
    client: Client,
    token: String,
    base_url: String,
}

impl GithubClient {
    /// Create a client against the public GitHub API.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(token, GITHUB_API_BASE)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GenieError::Unexpected(format!("Failed to create HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, token: token.into(), base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Contents-API URL for one file, with every path segment
    /// percent-encoded so names containing characters like `#` or `?`
    /// cannot change the request target.
    fn contents_url(&self, owner: &str, repo: &str, path: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| GenieError::Unexpected(format!("Invalid GitHub base URL: {e}")))?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                GenieError::Unexpected(format!("GitHub base URL {} has no path", self.base_url))
            })?;
            segments.pop_if_empty();
            segments.extend(["repos", owner, repo, "contents"]);
            segments.extend(path.split('/'));
        }
        Ok(url)
    }

    fn request(
        &self,
        method: reqwest::Method,
        url: impl reqwest::IntoUrl,
    ) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", ACCEPT_HEADER)
            .header("X-GitHub-Api-Version", API_VERSION)
    }

    /// "status: message" from a failed response, falling back to the raw
    /// body when GitHub's error shape is absent.
    async fn error_detail(response: Response) -> String {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message =
            serde_json::from_str::<GithubErrorBody>(&body).ok().and_then(|body| body.message);
        match message {
            Some(message) => format!("{status}: {message}"),
            None if body.trim().is_empty() => status.to_string(),
            None => format!("{status}: {body}"),
        }
    }

    /// Identity of the token's user (`GET /user`). The login becomes the
    /// repository owner and committer name downstream.
    pub async fn authenticated_user(&self) -> Result<AuthenticatedUser> {
        let response = self
            .request(reqwest::Method::GET, self.url("/user"))
            .send()
            .await
            .map_err(|e| GenieError::Unexpected(format!("GitHub request failed: {e}")))?;

        match response.status() {
            status if status.is_success() => response.json().await.map_err(|e| {
                GenieError::Unexpected(format!("Failed to decode GitHub user: {e}"))
            }),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(GenieError::AuthenticationFailed(Self::error_detail(response).await))
            }
            StatusCode::TOO_MANY_REQUESTS => {
                Err(GenieError::RateLimited(Self::error_detail(response).await))
            }
            _ => Err(GenieError::Unexpected(Self::error_detail(response).await)),
        }
    }

    /// Create a repository under the authenticated user (`POST /user/repos`).
    /// No auto-init: the first file commit creates the default branch.
    pub async fn create_repository(&self, name: &str) -> Result<Repository> {
        let request = CreateRepositoryRequest { name, auto_init: false, private: false };
        let response = self
            .request(reqwest::Method::POST, self.url("/user/repos"))
            .json(&request)
            .send()
            .await
            .map_err(|e| GenieError::RepositoryCreationFailed(format!("request failed: {e}")))?;

        match response.status() {
            status if status.is_success() => response.json().await.map_err(|e| {
                GenieError::Unexpected(format!("Failed to decode created repository: {e}"))
            }),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(GenieError::AuthenticationFailed(Self::error_detail(response).await))
            }
            StatusCode::TOO_MANY_REQUESTS => {
                Err(GenieError::RateLimited(Self::error_detail(response).await))
            }
            _ => Err(GenieError::RepositoryCreationFailed(Self::error_detail(response).await)),
        }
    }

    /// Commit one file to `branch` via the contents API
    /// (`PUT /repos/{owner}/{repo}/contents/{path}`).
    ///
    /// Failures are reported as a commit failure for this specific path,
    /// including transport errors, since the repository may already hold the
    /// files committed before it. The exception is HTTP 429, which stays a
    /// rate limit so callers can back off; its detail still names the path.
    pub async fn put_file(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        file: &FlattenedFile,
        committer: &CommitIdentity,
        author: &CommitIdentity,
    ) -> Result<()> {
        let request = PutFileRequest {
            message: format!("Add {}", file.path),
            content: BASE64_STANDARD.encode(file.content.as_bytes()),
            branch,
            committer,
            author,
        };

        let url = self.contents_url(owner, repo, &file.path)?;
        let response = self
            .request(reqwest::Method::PUT, url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenieError::FileCommitFailed {
                path: file.path.clone(),
                detail: format!("request failed: {e}"),
            })?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::TOO_MANY_REQUESTS => Err(GenieError::RateLimited(format!(
                "{} while committing {}",
                Self::error_detail(response).await,
                file.path
            ))),
            _ => Err(GenieError::FileCommitFailed {
                path: file.path.clone(),
                detail: Self::error_detail(response).await,
            }),
        }
    }
}
