//! # Preflight
//!
//! Preflight checks for external service integrations.
//!
//! This library backs two independent verification binaries: one requests a
//! single completion from a text-generation endpoint, the other constructs a
//! client handle for a messaging REST API from environment credentials. The
//! checks share no state and issue at most one request each.
//!
//! ## Generation check example
//!
//! ```rust,no_run
//! use preflight::{GenerationClient, GenerationConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = GenerationConfig::default()
//!         .with_model_name("distilgpt2")
//!         .with_max_tokens(20);
//!
//!     let client = GenerationClient::new(config);
//!     let completion = client.complete("Hello!").await?;
//!
//!     println!("Completion: {}", completion.text);
//!     Ok(())
//! }
//! ```
//!
//! ## Messaging check example
//!
//! ```rust
//! use preflight::MessagingClient;
//!
//! let client = MessagingClient::from_env();
//! println!("{}", client);
//! ```

pub mod generation;
pub mod messaging;

pub use generation::{
    Completion, GenerationClient, GenerationConfig, GenerationError, DEFAULT_MAX_TOKENS,
};
pub use messaging::{Credentials, MessagingClient, MessagingConfig};
