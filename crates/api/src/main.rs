//! API server binary for the AI marketing factory.

use std::time::Duration;

use api::config::{Config, WorkflowMode};
use api::state::AppState;
use api::webhook::WebhookForwarder;
use database::{video, Database};
use tracing::{info, warn};
use workflows::Studio;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting factory API server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // Assemble the vendor studio
    let studio = Studio::from_env()?;

    // Build application state
    let state = match config.workflow_mode {
        WorkflowMode::InProcess => AppState::new(db.clone(), studio),
        WorkflowMode::Webhook => {
            let url = config
                .workflow_webhook_url
                .clone()
                .ok_or("WORKFLOW_WEBHOOK_URL is required in webhook mode")?;
            AppState::with_forwarder(db.clone(), studio, WebhookForwarder::new(url))
        }
    };

    // Sweep stale in-flight videos in the background
    spawn_stale_video_sweep(
        db,
        config.video_stale_after_secs,
        config.video_sweep_interval_secs,
    );

    // Build router and start server
    let app = api::app(state);
    info!(addr = %config.addr, "Factory API server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodically fail videos stuck in a non-terminal state. No separate
/// process resumes a stuck render, so without this a crash mid-workflow
/// would leave rows `rendering` forever.
fn spawn_stale_video_sweep(db: Database, stale_after_secs: u64, interval_secs: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
        loop {
            interval.tick().await;
            match video::mark_stale_failed(db.pool(), stale_after_secs).await {
                Ok(0) => {}
                Ok(swept) => info!(swept, "Stale video sweep marked rows failed"),
                Err(e) => warn!(error = %e, "Stale video sweep failed"),
            }
        }
    });
}
