//! Deterministic service doubles
//!
//! These return pre-configured responses without making any network calls and
//! count every call, so tests can assert that a guard fired before the service
//! was reached.

use crate::LlmError;
use clausewise_domain::traits::{ChatModel, ChatRequest, SummarizationModel, SummaryRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Canned behavior for one input
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error,
    MissingCredential(String),
}

/// Shared state behind both mocks
#[derive(Debug)]
struct MockState<R> {
    replies: HashMap<String, MockReply>,
    requests: Vec<R>,
    fail_all: Option<MockReply>,
}

impl<R> Default for MockState<R> {
    fn default() -> Self {
        Self {
            replies: HashMap::new(),
            requests: Vec::new(),
            fail_all: None,
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn resolve(reply: Option<MockReply>, default: &str) -> Result<String, LlmError> {
    match reply {
        Some(MockReply::Text(text)) => Ok(text),
        Some(MockReply::Error) => Err(LlmError::Other("Mock error".to_string())),
        Some(MockReply::MissingCredential(var)) => Err(LlmError::MissingCredential(var)),
        None => Ok(default.to_string()),
    }
}

/// Mock chat-completion model
///
/// Responses are keyed by the full prompt.
///
/// # Examples
///
/// ```
/// use clausewise_llm::MockChatModel;
///
/// let mut model = MockChatModel::new("Fixed response");
/// model.add_response("prompt1", "response1");
/// assert_eq!(model.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockChatModel {
    default_response: String,
    state: Arc<Mutex<MockState<ChatRequest>>>,
}

impl MockChatModel {
    /// Create a mock with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// A mock whose every call fails as if the credential were absent
    pub fn without_credential(env_var: impl Into<String>) -> Self {
        let mock = Self::default();
        lock(&mock.state).fail_all = Some(MockReply::MissingCredential(env_var.into()));
        mock
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        lock(&self.state)
            .replies
            .insert(prompt.into(), MockReply::Text(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        lock(&self.state).replies.insert(prompt.into(), MockReply::Error);
    }

    /// Number of times `complete` was called
    pub fn call_count(&self) -> usize {
        lock(&self.state).requests.len()
    }

    /// Every request received, in call order
    pub fn requests(&self) -> Vec<ChatRequest> {
        lock(&self.state).requests.clone()
    }

    /// Forget recorded requests
    pub fn reset_call_count(&self) {
        lock(&self.state).requests.clear();
    }
}

impl Default for MockChatModel {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl ChatModel for MockChatModel {
    type Error = LlmError;

    async fn complete(&self, request: &ChatRequest) -> Result<String, Self::Error> {
        let reply = {
            let mut state = lock(&self.state);
            state.requests.push(request.clone());
            state
                .fail_all
                .clone()
                .or_else(|| state.replies.get(&request.prompt).cloned())
        };
        resolve(reply, &self.default_response)
    }
}

/// Mock summarization model
///
/// Responses are keyed by the chunk text.
#[derive(Debug, Clone)]
pub struct MockSummarizer {
    default_response: String,
    state: Arc<Mutex<MockState<SummaryRequest>>>,
}

impl MockSummarizer {
    /// Create a mock with a fixed summary for every chunk
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// A mock whose every call fails as if the credential were absent
    pub fn without_credential(env_var: impl Into<String>) -> Self {
        let mock = Self::default();
        lock(&mock.state).fail_all = Some(MockReply::MissingCredential(env_var.into()));
        mock
    }

    /// Add a specific summary for a given chunk
    pub fn add_response(&mut self, chunk: impl Into<String>, summary: impl Into<String>) {
        lock(&self.state)
            .replies
            .insert(chunk.into(), MockReply::Text(summary.into()));
    }

    /// Configure to return an error for a specific chunk
    pub fn add_error(&mut self, chunk: impl Into<String>) {
        lock(&self.state).replies.insert(chunk.into(), MockReply::Error);
    }

    /// Number of times `summarize` was called
    pub fn call_count(&self) -> usize {
        lock(&self.state).requests.len()
    }

    /// Every request received, in call order
    pub fn requests(&self) -> Vec<SummaryRequest> {
        lock(&self.state).requests.clone()
    }
}

impl Default for MockSummarizer {
    fn default() -> Self {
        Self::new("Default mock summary")
    }
}

impl SummarizationModel for MockSummarizer {
    type Error = LlmError;

    async fn summarize(&self, request: &SummaryRequest) -> Result<String, Self::Error> {
        let reply = {
            let mut state = lock(&self.state);
            state.requests.push(request.clone());
            state
                .fail_all
                .clone()
                .or_else(|| state.replies.get(&request.text).cloned())
        };
        resolve(reply, &self.default_response)
    }
}
