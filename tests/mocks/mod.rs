use async_trait::async_trait;

use persona_relay::errors::RelayError;
use persona_relay::llm_client::LLMClientTrait;

pub struct PanickingLLMClient;

#[async_trait]
impl LLMClientTrait for PanickingLLMClient {
    async fn generate_content(&self, _prompt: &str) -> Result<String, RelayError> {
        panic!("model client exploded");
    }
}
