//! Shared fixtures for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{CompletionRequest, LlmError, LlmGateway};

/// Scripted `LlmGateway`: pops one reply per call and records every request it sees.
/// Running out of replies yields `LlmError::MissingCompletion`.
#[derive(Default)]
pub struct FakeGateway {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl FakeGateway {
    pub fn new<I>(replies: I) -> Self
    where
        I: IntoIterator<Item = Result<String, LlmError>>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying<'a, I>(replies: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::new(replies.into_iter().map(|r| Ok(r.to_string())))
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for FakeGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::MissingCompletion))
    }
}
