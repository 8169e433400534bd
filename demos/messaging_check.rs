//! Messaging client construction example.

use preflight::{Credentials, MessagingClient, MessagingConfig};

fn main() {
    // Explicit credentials instead of the environment, for demonstration
    let credentials = Credentials::new(
        Some("AC00000000000000000000000000000000".to_string()),
        Some("your-auth-token".to_string()),
    );

    let config = MessagingConfig::default().with_credentials(credentials);
    let client = MessagingClient::new(config);

    println!("{}", client);
}
