#[derive(Debug, thiserror::Error)]
pub enum GenieError {
    /// No Groq API key was found in any credential source.
    #[error("API key required: pass one explicitly, set GROQ_API_KEY, or store one with `genie auth set-key`")]
    MissingCredential,

    /// An upstream service rejected the request with HTTP 429.
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// The completion provider answered with HTTP 500.
    #[error("Completion provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Any other non-success status from the completion provider.
    #[error("Completion request failed ({status}): {detail}")]
    Provider { status: String, detail: String },

    /// The provider answered but the reply carried no usable text.
    #[error("No content received from completion provider")]
    NoContent,

    /// The reply text is not valid JSON at all.
    #[error("Completion output is not valid JSON: {0}")]
    MalformedJson(String),

    /// The reply is valid JSON but not an array of file nodes.
    #[error("Completion output has an unexpected shape: {0}")]
    UnexpectedShape(String),

    /// A request is missing one or more required fields.
    #[error("Missing parameters: {0}")]
    MissingParameters(String),

    /// The GitHub credential was rejected.
    #[error("GitHub authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Creating the target repository failed, e.g. the name already exists.
    #[error("Repository creation failed: {0}")]
    RepositoryCreationFailed(String),

    /// A single file commit failed. Files committed before it are kept.
    #[error("Failed to commit {path}: {detail}")]
    FileCommitFailed { path: String, detail: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type Result<T> = std::result::Result<T, GenieError>;
