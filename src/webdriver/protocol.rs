use serde::Deserialize;

/// Every WebDriver response wraps its payload in `value`.
/// Legacy JSON-wire servers also put `sessionId` at the top level.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// Error payload carried in `value` on failure.
#[derive(Debug, Deserialize)]
pub struct Failure {
    pub error: String,
    #[serde(default)]
    pub message: String,
}

impl Envelope {
    /// The error payload, if this envelope carries one.
    pub fn failure(&self) -> Option<Failure> {
        self.value
            .get("error")
            .and_then(|_| serde_json::from_value(self.value.clone()).ok())
    }
    /// Session id from either the W3C or the legacy location.
    pub fn session(&self) -> Option<String> {
        self.value
            .get("sessionId")
            .and_then(|id| id.as_str())
            .map(String::from)
            .or_else(|| self.session_id.clone())
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}
