//! Application state shared across handlers.

use std::sync::Arc;

use database::Database;
use workflows::Studio;

use crate::webhook::WebhookForwarder;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// AI vendor bundle for in-process workflows and image generation.
    pub studio: Arc<Studio>,
    /// Present when `/api/workflows/*` requests are forwarded externally.
    pub forwarder: Option<Arc<WebhookForwarder>>,
}

impl AppState {
    /// State for in-process workflow execution.
    pub fn new(db: Database, studio: Studio) -> Self {
        Self {
            db,
            studio: Arc::new(studio),
            forwarder: None,
        }
    }

    /// State that forwards workflow requests to an external webhook. The
    /// studio stays available for the local image-generation route.
    pub fn with_forwarder(db: Database, studio: Studio, forwarder: WebhookForwarder) -> Self {
        Self {
            db,
            studio: Arc::new(studio),
            forwarder: Some(Arc::new(forwarder)),
        }
    }
}
