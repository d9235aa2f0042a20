use crate::ADVISOR_MAX_TOKENS;
use crate::ADVISOR_MODEL;
use crate::ADVISOR_TEMPERATURE;
use crate::ADVISOR_URL;

/// Which chat model to ask, and how.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorConfig {
    pub base: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            base: String::from(ADVISOR_URL),
            model: String::from(ADVISOR_MODEL),
            temperature: ADVISOR_TEMPERATURE,
            max_tokens: ADVISOR_MAX_TOKENS,
        }
    }
}
