//! Shared helpers for the axum integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chatrelay_axum::AxumContext;
use chatrelay_core::{Completion, CompletionError, CompletionPort, CompletionRequest, SystemPrompt};

/// Persona used by test contexts.
pub const TEST_PERSONA: &str = "You are the GT Holidays test assistant.";
pub const TEST_MODEL: &str = "llama-3.1-8b-instant";

/// Completion provider stub with a canned outcome.
///
/// Records every request it receives so tests can inspect the conversation.
pub struct StubProvider {
    outcome: Result<String, CompletionError>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl StubProvider {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(err: CompletionError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(err),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionPort for StubProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, CompletionError> {
        self.requests.lock().unwrap().push(request);
        self.outcome.clone().map(Completion::new)
    }
}

/// Build a context around a stub provider.
pub fn context_with(provider: Arc<StubProvider>) -> AxumContext {
    AxumContext::with_provider(provider, SystemPrompt::new(TEST_PERSONA), TEST_MODEL)
}
