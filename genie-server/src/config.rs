use genie_core::CompletionModel;
use genie_github::GITHUB_API_BASE;
use std::{sync::Arc, time::Duration};

/// Security configuration for the Repo Genie server.
#[derive(Clone, Debug)]
pub struct SecurityConfig {
    /// Allowed origins for CORS (empty = allow all, which is NOT recommended for production)
    pub allowed_origins: Vec<String>,
    /// Maximum request body size in bytes (default: 10MB)
    pub max_body_size: usize,
    /// Request timeout duration (default: 120 seconds). Generation holds the
    /// request open for a full completion round trip, so this stays generous.
    pub request_timeout: Duration,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(), // Empty = permissive (for dev), should be configured for prod
            max_body_size: 10 * 1024 * 1024, // 10MB
            request_timeout: Duration::from_secs(120),
        }
    }
}

impl SecurityConfig {
    /// Create a production configuration with specific allowed origins.
    pub fn production(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins, ..Default::default() }
    }
}

/// Configuration for the Repo Genie server.
///
/// The server is the relay topology: generation runs against the model held
/// here, configured once at startup, and clients never send a Groq key. With
/// no model configured, generation requests are rejected as unauthorized.
/// Publishing instead uses the GitHub token each request carries.
#[derive(Clone, Default)]
pub struct ServerConfig {
    pub model: Option<Arc<dyn CompletionModel>>,
    /// GitHub API base URL, overridable for tests.
    pub github_base_url: Option<String>,
    pub security: SecurityConfig,
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: Arc<dyn CompletionModel>) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_github_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.github_base_url = Some(base_url.into());
        self
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = security;
        self
    }

    /// Configure allowed CORS origins.
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.security.allowed_origins = origins;
        self
    }

    /// Configure maximum request body size.
    pub fn with_max_body_size(mut self, size: usize) -> Self {
        self.security.max_body_size = size;
        self
    }

    /// Configure the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.security.request_timeout = timeout;
        self
    }

    /// The effective GitHub API base URL.
    pub fn effective_github_base_url(&self) -> &str {
        self.github_base_url.as_deref().unwrap_or(GITHUB_API_BASE)
    }
}
