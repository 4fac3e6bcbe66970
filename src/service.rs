use std::sync::Arc;

use crate::consts;
use crate::errors::RelayError;
use crate::llm_client::LLMClientTrait;
use crate::models::request::ChatRequest;
use crate::models::response::ChatReply;

pub struct RelayService {
    llm_client: Arc<dyn LLMClientTrait>,
    instructions: String,
}

impl RelayService {
    pub fn new(llm_client: Arc<dyn LLMClientTrait>, instructions: impl Into<String>) -> Self {
        Self {
            llm_client,
            instructions: instructions.into(),
        }
    }

    pub fn build_prompt(&self, message: &str) -> String {
        format!(
            "{}{}{}",
            self.instructions,
            consts::USER_QUESTION_SEPARATOR,
            message
        )
    }

    /// Validates the request, makes one model call and wraps its text.
    pub async fn relay(&self, request: ChatRequest) -> Result<ChatReply, RelayError> {
        let message = request
            .message_text()
            .ok_or_else(|| RelayError::ValidationError(consts::MESSAGE_REQUIRED.to_string()))?;

        let prompt = self.build_prompt(&message);
        let reply = self.llm_client.generate_content(&prompt).await?;

        Ok(ChatReply { reply })
    }
}
