use async_trait::async_trait;
use genie_core::{ChatCompletion, CompletionModel, GenieError, Result};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted completion model for tests.
///
/// Each call to [`CompletionModel::complete`] pops the next scripted outcome
/// in order; an exhausted script is an error so tests notice unexpected
/// extra calls.
pub struct MockModel {
    name: String,
    outcomes: Mutex<VecDeque<Result<ChatCompletion>>>,
}

impl MockModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), outcomes: Mutex::new(VecDeque::new()) }
    }

    /// Script a reply whose first choice carries the given text.
    pub fn with_content(self, content: impl Into<String>) -> Self {
        self.with_completion(ChatCompletion::from_content(content))
    }

    pub fn with_completion(self, completion: ChatCompletion) -> Self {
        self.push(Ok(completion));
        self
    }

    pub fn with_error(self, error: GenieError) -> Self {
        self.push(Err(error));
        self
    }

    fn push(&self, outcome: Result<ChatCompletion>) {
        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.push_back(outcome);
        }
    }
}

#[async_trait]
impl CompletionModel for MockModel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, _prompt: &str) -> Result<ChatCompletion> {
        let outcome = self
            .outcomes
            .lock()
            .ok()
            .and_then(|mut outcomes| outcomes.pop_front());
        outcome.unwrap_or_else(|| {
            Err(GenieError::Unexpected("MockModel script is exhausted".to_string()))
        })
    }
}
