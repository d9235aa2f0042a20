use super::*;
use serde::Deserialize;
use serde::Serialize;

/// [`Advisor`] speaking the OpenAI-compatible chat-completions protocol.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
    credentials: Credentials,
    config: AdvisorConfig,
}

impl ChatClient {
    pub fn new(config: &AdvisorConfig, credentials: &Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/chat/completions", config.base.trim_end_matches('/')),
            credentials: credentials.clone(),
            config: config.clone(),
        }
    }
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
    fn request<'a>(&'a self, prompt: &'a str, preamble: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: [
                Message {
                    role: "system",
                    content: preamble,
                },
                Message {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }
}

#[async_trait::async_trait]
impl Advisor for ChatClient {
    async fn propose(&self, prompt: &str, preamble: &str) -> Result<String, AdvisoryError> {
        log::debug!("[advisor] asking {} ({} prompt bytes)", self.config.model, prompt.len());
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.credentials.expose())
            .json(&self.request(prompt, preamble))
            .send()
            .await
            .map_err(|e| AdvisoryError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AdvisoryError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(AdvisoryError::Status(status.as_u16(), body));
        }
        let answer = serde_json::from_str::<ChatResponse>(&body)
            .map_err(|e| AdvisoryError::Malformed(e.to_string()))?
            .answer()?;
        log::debug!("[advisor] answered {:?}", answer);
        Ok(answer)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Reply,
}

#[derive(Debug, Deserialize)]
struct Reply {
    content: Option<String>,
}

impl ChatResponse {
    /// First choice's text, trimmed. Blank or null content is an empty
    /// answer; only a response without choices is an error.
    fn answer(self) -> Result<String, AdvisoryError> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .map(|content| content.trim().to_string())
            .ok_or(AdvisoryError::Empty)
    }
}
