use super::protocol::Envelope;
use super::*;
use crate::remote::EngineError;
use crate::remote::Script;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// One live browser session on a WebDriver server.
///
/// Dropping a session does not end it; call [`Script::close`] (directly or
/// through [`crate::remote::Engine::release`]) so the browser window goes away.
#[derive(Debug)]
pub struct Session {
    http: reqwest::Client,
    server: String,
    id: String,
    closed: AtomicBool,
}

impl Session {
    /// Ask the server for a new browser session.
    pub async fn open(config: &WebDriverConfig) -> Result<Self, EngineError> {
        let http = reqwest::Client::new();
        let server = config.server.trim_end_matches('/').to_string();
        log::info!("[webdriver] opening {} session at {}", config.browser, server);
        let request = http
            .post(format!("{}/session", server))
            .json(&config.capabilities());
        let envelope = Self::send(request).await?;
        let id = envelope
            .session()
            .ok_or_else(|| EngineError::Malformed("new session response without an id".into()))?;
        log::debug!("[webdriver] session {}", id);
        Ok(Self {
            http,
            server,
            id,
            closed: AtomicBool::new(false),
        })
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    /// Load `url` in the session's window.
    pub async fn navigate(&self, url: &str) -> Result<(), EngineError> {
        self.check()?;
        log::info!("[webdriver] navigating to {}", url);
        let request = self
            .http
            .post(self.endpoint("url"))
            .json(&serde_json::json!({ "url": url }));
        Self::send(request).await.map(|_| ())
    }
    fn endpoint(&self, path: &str) -> String {
        format!("{}/session/{}/{}", self.server, self.id, path)
    }
    fn check(&self) -> Result<(), EngineError> {
        match self.closed.load(Ordering::SeqCst) {
            true => Err(EngineError::Closed),
            false => Ok(()),
        }
    }
    async fn send(request: reqwest::RequestBuilder) -> Result<Envelope, EngineError> {
        let response = request
            .send()
            .await
            .map_err(|e| EngineError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| EngineError::Transport(e.to_string()))?;
        let envelope = serde_json::from_str::<Envelope>(&body).map_err(|e| {
            match status.is_success() {
                true => EngineError::Malformed(format!("webdriver response: {}", e)),
                false => EngineError::Transport(format!("webdriver status {}: {}", status, body)),
            }
        })?;
        match envelope.failure() {
            Some(failure) => Err(EngineError::Transport(failure.to_string())),
            None if !status.is_success() => {
                Err(EngineError::Transport(format!("webdriver status {}", status)))
            }
            None => Ok(envelope),
        }
    }
}

#[async_trait::async_trait]
impl Script for Session {
    async fn execute(&self, script: &str) -> Result<serde_json::Value, EngineError> {
        self.check()?;
        let request = self
            .http
            .post(self.endpoint("execute/sync"))
            .json(&serde_json::json!({ "script": script, "args": [] }));
        Self::send(request).await.map(|envelope| envelope.value)
    }
    async fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        log::info!("[webdriver] closing session {}", self.id);
        let url = format!("{}/session/{}", self.server, self.id);
        if let Err(e) = Self::send(self.http.delete(url)).await {
            log::warn!("[webdriver] session teardown failed: {}", e);
        }
    }
}
