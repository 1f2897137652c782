use anyhow::Result;
use genie_generator::API_KEY_ENV;
use genie_model::{GroqClient, GroqConfig};
use genie_server::{ServerConfig, create_app};
use std::sync::Arc;

/// Start the HTTP service.
///
/// The server-side Groq key comes from the environment. Without one the
/// service still runs, but `/api/generate` answers 401 until it is set.
pub async fn run(port: u16) -> Result<()> {
    let config = match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => {
            let model = GroqClient::new(GroqConfig::new(key.trim()))?;
            ServerConfig::new().with_model(Arc::new(model))
        }
        _ => {
            tracing::warn!("{API_KEY_ENV} is not set; /api/generate will reject requests");
            ServerConfig::new()
        }
    };

    let app = create_app(config);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("Repo Genie server starting on http://{addr}");
    println!("Press Ctrl+C to stop");

    axum::serve(listener, app).await?;

    Ok(())
}
