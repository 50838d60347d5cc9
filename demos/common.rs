//! Shared setup for the demo binaries.

use std::io;

use cloudsms::CloudSmsClient;
use tracing_subscriber::EnvFilter;

/// Read a required environment variable.
pub fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

/// Install a `RUST_LOG`-driven subscriber and build a client from
/// `CLOUDSMS_API_TOKEN`, `CLOUDSMS_SENDER_ID` and optional `CLOUDSMS_BASE_URL`.
pub fn client_from_env() -> Result<CloudSmsClient, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_token = required_env("CLOUDSMS_API_TOKEN")?;
    let sender_id = required_env("CLOUDSMS_SENDER_ID")?;

    let mut builder = CloudSmsClient::builder(api_token, sender_id);
    if let Ok(base_url) = std::env::var("CLOUDSMS_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    Ok(builder.build()?)
}
