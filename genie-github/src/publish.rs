//! Sequential publishing of a generated tree into a fresh repository.

use crate::client::{GITHUB_API_BASE, GithubClient};
use crate::wire::CommitIdentity;
use genie_core::{FileNode, GenieError, Result, flatten};
use serde::Serialize;

/// Branch every file lands on. The first commit creates it.
pub const DEFAULT_BRANCH: &str = "main";

const DEFAULT_COMMITTER_EMAIL: &str = "uploader@example.com";
const DEFAULT_AUTHOR_NAME: &str = "Repo Genie";
const DEFAULT_AUTHOR_EMAIL: &str = "repo-genie@users.noreply.github.com";

/// Publishes a generated project tree to GitHub.
///
/// The flow is strictly sequential: resolve the token's user, create the
/// repository, then commit the flattened files one at a time in flattening
/// order. Each commit builds on the branch head the previous one advanced,
/// so there is no parallelism and no rollback; a failure part-way leaves the
/// earlier commits in place and is reported as such.
#[derive(Debug, Clone)]
pub struct Publisher {
    base_url: String,
    committer_email: String,
    author: CommitIdentity,
}

impl Default for Publisher {
    fn default() -> Self {
        Self::new()
    }
}

impl Publisher {
    pub fn new() -> Self {
        Self {
            base_url: GITHUB_API_BASE.to_string(),
            committer_email: DEFAULT_COMMITTER_EMAIL.to_string(),
            author: CommitIdentity::new(DEFAULT_AUTHOR_NAME, DEFAULT_AUTHOR_EMAIL),
        }
    }

    /// Point at a custom GitHub API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the commit author identity.
    pub fn with_author(mut self, author: CommitIdentity) -> Self {
        self.author = author;
        self
    }

    /// Override the committer email. The committer name is always the
    /// authenticated user's login.
    pub fn with_committer_email(mut self, email: impl Into<String>) -> Self {
        self.committer_email = email.into();
        self
    }

    /// Create `repository` under the token's user and commit every file in
    /// `tree` to [`DEFAULT_BRANCH`].
    ///
    /// Succeeds only after the last file commit. All three inputs must be
    /// non-empty; otherwise nothing is sent at all.
    pub async fn publish(
        &self,
        access_token: &str,
        repository: &str,
        tree: &[FileNode],
    ) -> Result<PublishReport> {
        if access_token.trim().is_empty() || repository.trim().is_empty() || tree.is_empty() {
            return Err(GenieError::MissingParameters(
                "accessToken, repo, or files".to_string(),
            ));
        }

        let files = flatten(tree);
        let client = GithubClient::with_base_url(access_token, &self.base_url)?;

        let user = client.authenticated_user().await?;
        tracing::info!(
            owner = %user.login,
            repo = repository,
            files = files.len(),
            "publishing generated project"
        );

        let repo = client.create_repository(repository).await?;

        let committer = CommitIdentity::new(user.login.clone(), self.committer_email.clone());
        for file in &files {
            client
                .put_file(&user.login, repository, DEFAULT_BRANCH, file, &committer, &self.author)
                .await?;
            tracing::debug!(path = %file.path, "committed file");
        }

        Ok(PublishReport {
            owner: user.login,
            repository: repo.name,
            files_committed: files.len(),
            html_url: repo.html_url,
        })
    }
}

/// What a successful publish produced.
#[derive(Debug, Clone, Serialize)]
pub struct PublishReport {
    pub owner: String,
    pub repository: String,
    pub files_committed: usize,
    pub html_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_inputs_fail_fast() {
        let publisher = Publisher::new();
        let tree = vec![FileNode::file("README.md", "# demo")];

        let err = publisher.publish("  ", "demo", &tree).await.unwrap_err();
        assert!(matches!(err, GenieError::MissingParameters(_)));

        let err = publisher.publish("gh_token", "", &tree).await.unwrap_err();
        assert!(matches!(err, GenieError::MissingParameters(_)));

        let err = publisher.publish("gh_token", "demo", &[]).await.unwrap_err();
        assert!(matches!(err, GenieError::MissingParameters(_)));
    }
}
