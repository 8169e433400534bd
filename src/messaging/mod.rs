//! Messaging module for constructing a credentialed API client handle.

mod client;

pub use client::{
    Credentials, MessagingClient, MessagingConfig, DEFAULT_BASE_URL, ENV_ACCOUNT_SID,
    ENV_AUTH_TOKEN,
};
