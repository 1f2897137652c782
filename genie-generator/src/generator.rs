//! The prompt-to-tree generation pipeline.

use crate::credentials::resolve_default;
use genie_core::{CompletionModel, FileNode, GenieError, Result, parse_project_tree};
use genie_model::{GroqClient, GroqConfig};
use std::sync::Arc;

/// Turns a natural-language project description into a project tree.
///
/// The pipeline is one completion request followed by a strict parse. Every
/// failure propagates typed: a missing credential stays distinct so callers
/// can prompt for a key, a rate limit stays distinct so callers can back
/// off, and parse failures identify which contract the reply broke.
pub struct ProjectGenerator {
    model: Arc<dyn CompletionModel>,
}

impl ProjectGenerator {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    /// Generate a project tree for `prompt`.
    pub async fn generate(&self, prompt: &str) -> Result<Vec<FileNode>> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(GenieError::MissingParameters("prompt".to_string()));
        }

        tracing::info!(model = self.model.name(), "generating project structure");
        let completion = self.model.complete(prompt).await?;

        let content = completion
            .first_content()
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .ok_or(GenieError::NoContent)?;

        let tree = parse_project_tree(content)?;
        tracing::info!(top_level_nodes = tree.len(), "parsed generated project structure");
        Ok(tree)
    }
}

/// One-call generation: resolve a key from the standard sources, build the
/// Groq client, and run the pipeline.
pub async fn generate_project(prompt: &str, api_key: Option<&str>) -> Result<Vec<FileNode>> {
    let key = resolve_default(api_key)?;
    let model = GroqClient::new(GroqConfig::new(key))?;
    ProjectGenerator::new(Arc::new(model)).generate(prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use genie_model::MockModel;

    fn generator(mock: MockModel) -> ProjectGenerator {
        ProjectGenerator::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_generates_tree_from_reply() {
        let mock = MockModel::new("scripted").with_content(
            r##"[{"type": "file", "name": "README.md", "content": "# demo", "language": "markdown"}]"##,
        );
        let tree = generator(mock).generate("a demo project").await.unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].name(), "README.md");
    }

    #[tokio::test]
    async fn test_empty_prompt_is_rejected_before_any_request() {
        let mock = MockModel::new("scripted");
        let err = generator(mock).generate("   ").await.unwrap_err();
        assert!(matches!(err, GenieError::MissingParameters(_)));
    }

    #[tokio::test]
    async fn test_blank_reply_is_no_content() {
        let mock = MockModel::new("scripted").with_content("   \n");
        let err = generator(mock).generate("a demo project").await.unwrap_err();
        assert!(matches!(err, GenieError::NoContent));
    }

    #[tokio::test]
    async fn test_reply_without_message_is_no_content() {
        let completion = genie_core::ChatCompletion {
            id: None,
            model: None,
            choices: vec![],
            usage: None,
        };
        let mock = MockModel::new("scripted").with_completion(completion);
        let err = generator(mock).generate("a demo project").await.unwrap_err();
        assert!(matches!(err, GenieError::NoContent));
    }

    #[tokio::test]
    async fn test_model_errors_pass_through_untouched() {
        let mock = MockModel::new("scripted")
            .with_error(GenieError::RateLimited("slow down".to_string()));
        let err = generator(mock).generate("a demo project").await.unwrap_err();
        match err {
            GenieError::RateLimited(detail) => assert_eq!(detail, "slow down"),
            other => panic!("expected RateLimited, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_prose_reply_is_malformed_json() {
        let mock = MockModel::new("scripted").with_content("Sure! Here is your project:");
        let err = generator(mock).generate("a demo project").await.unwrap_err();
        assert!(matches!(err, GenieError::MalformedJson(_)));
    }

    #[tokio::test]
    async fn test_object_reply_is_unexpected_shape() {
        let mock = MockModel::new("scripted").with_content(r#"{"name": "not a tree"}"#);
        let err = generator(mock).generate("a demo project").await.unwrap_err();
        assert!(matches!(err, GenieError::UnexpectedShape(_)));
    }
}
