use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::RelayError;
use crate::llm_client::LLMClientTrait;

/// Returns queued results in order and records every prompt it receives.
pub struct MockLLMClient {
    responses: Mutex<VecDeque<Result<String, RelayError>>>,
    calls: Mutex<Vec<String>>,
}

impl MockLLMClient {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn add_response(&self, response: Result<String, RelayError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMClientTrait for MockLLMClient {
    async fn generate_content(&self, prompt: &str) -> Result<String, RelayError> {
        self.calls.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RelayError::ApiError("no mock response queued".to_string())))
    }
}
