//! Basic generation check example.

use preflight::{GenerationClient, GenerationConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    // Configure the generation endpoint
    // You can customize these settings based on your setup
    let config = GenerationConfig::default()
        .with_base_url("http://localhost:8000/v1")
        .with_model_name("distilgpt2")
        .with_max_tokens(20);

    let client = GenerationClient::new(config);

    let prompt = "Hello!";
    println!("📝 Prompt: {}\n", prompt);

    match client.complete(prompt).await {
        Ok(completion) => {
            println!("✅ Completion: {}", completion.text);
        }
        Err(e) => {
            eprintln!("❌ Generation failed: {}", e);
        }
    }

    Ok(())
}
