//! Preflight check for the messaging API client.
//!
//! Constructs a client handle from environment credentials and prints its
//! representation. No request is issued.
//! Run with: cargo run --bin preflight-messaging

use preflight::MessagingClient;

fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignore errors if file doesn't exist)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let client = MessagingClient::from_env();

    println!("📨 Preflight - Messaging Client Check");
    println!("================================================");
    println!("{}", client);

    if !client.is_authenticated() {
        println!("⚠️  Credentials missing; handle is unauthenticated");
    }

    Ok(())
}
