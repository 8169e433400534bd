//! Preflight check for the text-generation endpoint.
//!
//! Requests one completion for a fixed prompt and prints it.
//! Run with: cargo run --bin preflight-generation

use preflight::{GenerationClient, GenerationConfig};
use std::env;

/// Prompt sent by the check.
const PROMPT: &str = "Hello!";

/// Maximum number of tokens to generate.
const MAX_TOKENS: u32 = 20;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignore errors if file doesn't exist)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Get configuration from environment or use defaults
    let base_url =
        env::var("MODEL_BASE_URL").unwrap_or_else(|_| "http://localhost:8000/v1".to_string());
    let api_key = env::var("MODEL_API_KEY").unwrap_or_else(|_| "EMPTY".to_string());
    let model_name = env::var("MODEL_NAME").unwrap_or_else(|_| "distilgpt2".to_string());

    let config = GenerationConfig::default()
        .with_base_url(&base_url)
        .with_api_key(&api_key)
        .with_model_name(&model_name)
        .with_max_tokens(MAX_TOKENS);

    println!("🤖 Preflight - Text Generation Check");
    println!("================================================");
    println!("Model: {} @ {}", model_name, base_url);
    println!("Prompt: {:?} (max {} tokens)", PROMPT, MAX_TOKENS);
    println!("================================================\n");

    let client = GenerationClient::new(config);
    let completion = client.complete(PROMPT).await?;

    println!("✅ Completion: {}", completion.text);

    Ok(())
}
