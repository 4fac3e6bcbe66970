use std::sync::Arc;
use std::time::Duration;

use persona_relay::app::create_app;
use persona_relay::config;
use persona_relay::llm_client::LLMClient;
use persona_relay::service::RelayService;
use persona_relay::{consts, supervisor};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    supervisor::install_panic_hook();
    log::info!("Initializing persona relay service...");

    let config = config::load_config().map_err(std::io::Error::other)?;

    // A missing key is not fatal: the server still starts and every chat
    // request fails with a 500 until the key is provided.
    match config.gemini.api_key.as_deref() {
        Some(key) => log::info!("API key loaded: {}", config::mask_api_key(key)),
        None => log::error!("GEMINI_API_KEY is missing; chat requests will fail"),
    }
    log::debug!("config: {:?}", config);

    let http_client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(consts::CONNECT_TIMEOUT_SECS))
        .build()
        .map_err(std::io::Error::other)?;

    let llm_client = Arc::new(LLMClient::new(http_client, &config.gemini));
    let relay_service = Arc::new(RelayService::new(llm_client, config.instructions.clone()));

    let server = actix_web::HttpServer::new(move || create_app(relay_service.clone()))
        .bind((config.host.as_str(), config.port))?;

    log::info!(
        "AI relay ({}) listening on http://{}:{}",
        config.gemini.model,
        config.host,
        config.port
    );

    server.run().await
}
