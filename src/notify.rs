//! "Themes changed" notification.
//!
//! After the files are on disk, the dashboard host has to be told to reload
//! them. Home Assistant exposes that as the `frontend.reload_themes`
//! service, so the HTTP notifier is a single authenticated POST.

use std::fmt;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::ReloadConfig;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("reload request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("reload request rejected with status {0}")]
    Status(StatusCode),
}

/// Asks the host to broadcast "themes changed". Takes no parameters.
#[async_trait]
pub trait ReloadNotifier: Send + Sync {
    /// # Errors
    ///
    /// Transport failures or a rejected request.
    async fn notify_themes_changed(&self) -> Result<(), NotifyError>;
}

/// Calls `POST {base_url}/api/services/frontend/reload_themes`.
pub struct HttpReloadNotifier {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl HttpReloadNotifier {
    #[must_use]
    pub fn new(base_url: &str, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!(
                "{}/api/services/frontend/reload_themes",
                base_url.trim_end_matches('/')
            ),
            token: token.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl fmt::Debug for HttpReloadNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpReloadNotifier")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ReloadNotifier for HttpReloadNotifier {
    async fn notify_themes_changed(&self) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status));
        }
        tracing::info!(endpoint = %self.endpoint, "requested theme reload");
        Ok(())
    }
}

/// Used when no reload endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

#[async_trait]
impl ReloadNotifier for NoopNotifier {
    async fn notify_themes_changed(&self) -> Result<(), NotifyError> {
        tracing::info!("no reload endpoint configured; reload themes in the dashboard manually");
        Ok(())
    }
}

/// Pick a notifier for `reload`, reading the token from the environment.
///
/// Falls back to [`NoopNotifier`] when nothing is configured or the token
/// variable is unset.
#[must_use]
pub fn from_config(reload: Option<&ReloadConfig>) -> Box<dyn ReloadNotifier> {
    let Some(reload) = reload else {
        return Box::new(NoopNotifier);
    };
    match std::env::var(&reload.token_env) {
        Ok(token) if !token.is_empty() => {
            let notifier = HttpReloadNotifier::new(&reload.base_url, token);
            tracing::debug!(endpoint = notifier.endpoint(), "reload notifications enabled");
            Box::new(notifier)
        }
        _ => {
            tracing::warn!(
                token_env = %reload.token_env,
                "reload endpoint configured but token variable is unset; skipping reload"
            );
            Box::new(NoopNotifier)
        }
    }
}
