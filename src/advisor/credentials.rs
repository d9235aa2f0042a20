use crate::CREDENTIAL_VAR;
use anyhow::Context;

/// Bearer key for the advisory service. Never printed.
#[derive(Clone, PartialEq)]
pub struct Credentials(String);

impl Credentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
    /// Validate a key that may be missing or blank.
    pub fn resolve(key: Option<String>) -> anyhow::Result<Self> {
        key.map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .map(Self)
            .with_context(|| format!("{} is not set", CREDENTIAL_VAR))
    }
    /// Read the key from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::resolve(std::env::var(CREDENTIAL_VAR).ok())
    }
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credentials(***)")
    }
}
