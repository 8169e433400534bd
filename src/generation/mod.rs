//! Generation module for text completion inference.

mod client;

pub use client::{
    Completion, GenerationClient, GenerationConfig, GenerationError, DEFAULT_MAX_TOKENS,
};
