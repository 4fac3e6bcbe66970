use std::sync::Arc;

use reqwest::Client;

use persona_relay::config::GeminiConfig;
use persona_relay::consts;
use persona_relay::llm_client::LLMClient;
use persona_relay::service::RelayService;

pub const TEST_MODEL: &str = "gemini-flash-latest";
pub const TEST_API_KEY: &str = "test-key";

pub fn create_gemini_config(api_url: String, api_key: Option<&str>) -> GeminiConfig {
    GeminiConfig {
        model: TEST_MODEL.to_string(),
        api_url,
        api_key: api_key.map(str::to_string),
    }
}

pub fn create_llm_client(api_url: String) -> LLMClient {
    LLMClient::new(Client::new(), &create_gemini_config(api_url, Some(TEST_API_KEY)))
}

pub fn create_relay_service(api_url: String) -> Arc<RelayService> {
    create_relay_service_with_key(api_url, Some(TEST_API_KEY))
}

pub fn create_relay_service_with_key(api_url: String, api_key: Option<&str>) -> Arc<RelayService> {
    let llm_client = Arc::new(LLMClient::new(
        Client::new(),
        &create_gemini_config(api_url, api_key),
    ));
    Arc::new(RelayService::new(llm_client, consts::INSTRUCTION_TEMPLATE))
}

pub fn expected_prompt(message: &str) -> String {
    format!("{}\n\nUser Question: {}", consts::INSTRUCTION_TEMPLATE, message)
}
