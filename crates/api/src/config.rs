//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// How the `/api/workflows/*` routes are served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowMode {
    /// Workflows run inside this process.
    InProcess,
    /// Workflow requests are forwarded to an external automation webhook.
    Webhook,
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Whether workflows run in-process or via webhook.
    pub workflow_mode: WorkflowMode,
    /// Webhook base URL, required in webhook mode.
    pub workflow_webhook_url: Option<String>,
    /// Age after which an in-flight video is swept to `failed`.
    pub video_stale_after_secs: u64,
    /// How often the stale-video sweep runs.
    pub video_sweep_interval_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `FACTORY_ADDR` | Server bind address | `127.0.0.1:8787` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:factory.db?mode=rwc` |
    /// | `WORKFLOW_MODE` | `in-process` or `webhook` | `in-process` |
    /// | `WORKFLOW_WEBHOOK_URL` | Webhook base URL | (required in webhook mode) |
    /// | `VIDEO_STALE_AFTER_SECS` | Stale in-flight video threshold | `900` |
    /// | `VIDEO_SWEEP_INTERVAL_SECS` | Sweep period | `300` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("FACTORY_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8787".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url =
            env::var("SQLITE_PATH").unwrap_or_else(|_| "sqlite:factory.db?mode=rwc".to_string());

        let workflow_mode = match env::var("WORKFLOW_MODE").as_deref() {
            Ok("webhook") => WorkflowMode::Webhook,
            Ok("in-process") | Err(_) => WorkflowMode::InProcess,
            Ok(other) => return Err(ConfigError::InvalidWorkflowMode(other.to_string())),
        };

        let workflow_webhook_url = env::var("WORKFLOW_WEBHOOK_URL").ok();
        if workflow_mode == WorkflowMode::Webhook && workflow_webhook_url.is_none() {
            return Err(ConfigError::MissingWebhookUrl);
        }

        let video_stale_after_secs = parse_secs("VIDEO_STALE_AFTER_SECS", 900)?;
        let video_sweep_interval_secs = parse_secs("VIDEO_SWEEP_INTERVAL_SECS", 300)?;

        Ok(Self {
            addr,
            database_url,
            workflow_mode,
            workflow_webhook_url,
            video_stale_after_secs,
            video_sweep_interval_secs,
        })
    }
}

fn parse_secs(var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidSeconds(var)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid FACTORY_ADDR format")]
    InvalidAddr,

    #[error("Invalid WORKFLOW_MODE: {0} (expected in-process or webhook)")]
    InvalidWorkflowMode(String),

    #[error("WORKFLOW_WEBHOOK_URL is required when WORKFLOW_MODE=webhook")]
    MissingWebhookUrl,

    #[error("{0} must be a whole number of seconds")]
    InvalidSeconds(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for var in [
            "FACTORY_ADDR",
            "SQLITE_PATH",
            "WORKFLOW_MODE",
            "WORKFLOW_WEBHOOK_URL",
            "VIDEO_STALE_AFTER_SECS",
            "VIDEO_SWEEP_INTERVAL_SECS",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.addr.port(), 8787);
        assert_eq!(config.workflow_mode, WorkflowMode::InProcess);
        assert_eq!(config.video_stale_after_secs, 900);
        assert_eq!(config.video_sweep_interval_secs, 300);
    }

    #[test]
    fn test_webhook_mode_requires_url() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("WORKFLOW_MODE", "webhook");

        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::MissingWebhookUrl)));

        env::set_var("WORKFLOW_WEBHOOK_URL", "https://hooks.example.com/factory");
        let config = Config::from_env().unwrap();
        assert_eq!(config.workflow_mode, WorkflowMode::Webhook);

        clear_env();
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("WORKFLOW_MODE", "sideways");

        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidWorkflowMode(_))));

        clear_env();
    }
}
