use crate::*;
use crate::advisor::AdvisorConfig;
use crate::advisor::STRATEGY;
use crate::board::Color;
use crate::bridge::Acknowledge;
use crate::bridge::ArbiterConfig;
use crate::bridge::Submission;
use crate::webdriver::WebDriverConfig;
use clap::Parser;
use clap::builder::TypedValueParser;
use std::time::Duration;

/// Let a chat model play one side of a live Romgon game.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Page serving the game
    #[arg(long, default_value = GAME_URL)]
    pub game: String,
    /// WebDriver server (chromedriver, geckodriver, ...)
    #[arg(long, default_value = WEBDRIVER_URL)]
    pub webdriver: String,
    /// Browser to request from the WebDriver server
    #[arg(long, default_value = WEBDRIVER_BROWSER)]
    pub browser: String,
    /// Run the browser without a window
    #[arg(long)]
    pub headless: bool,
    /// Colour the bridge plays
    #[arg(long, value_enum, default_value_t = Color::Black)]
    pub side: Color,
    /// Milliseconds between turn polls
    #[arg(long, default_value_t = POLL_INTERVAL_MS)]
    pub poll_ms: u64,
    /// Seconds any engine call may take
    #[arg(long, default_value_t = ENGINE_TIMEOUT_SECS)]
    pub engine_timeout: u64,
    /// Seconds an advisor call may take
    #[arg(long, default_value_t = ADVISOR_TIMEOUT_SECS)]
    pub advisor_timeout: u64,
    /// Seconds to wait for an acknowledgment before continuing anyway.
    /// An expired terminal prompt is abandoned, not answered
    #[arg(long)]
    pub ack_timeout: Option<u64>,
    /// Consecutive failures after which the bridge stops
    #[arg(long, default_value_t = MAX_CONSECUTIVE_FAULTS, value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize))]
    pub max_faults: usize,
    /// Leave the engine's position analysis out of prompts
    #[arg(long)]
    pub no_analysis: bool,
    /// Print moves for the human to play instead of submitting them
    #[arg(long, conflicts_with = "unattended")]
    pub advise_only: bool,
    /// Pause for acknowledgment after every move
    #[arg(long)]
    pub confirm_each_move: bool,
    /// Never prompt: retry every failure and skip acknowledgments
    #[arg(long)]
    pub unattended: bool,
    /// Chat model asked for moves
    #[arg(long, default_value = ADVISOR_MODEL)]
    pub model: String,
    /// OpenAI-compatible API root
    #[arg(long, default_value = ADVISOR_URL)]
    pub api_base: String,
    /// Sampling temperature
    #[arg(long, default_value_t = ADVISOR_TEMPERATURE)]
    pub temperature: f32,
    /// Completion token budget
    #[arg(long, default_value_t = ADVISOR_MAX_TOKENS)]
    pub max_tokens: u32,
    /// Seconds to let the page load before looking for the engine
    #[arg(long, default_value_t = LOAD_DELAY_SECS)]
    pub load_delay: u64,
}

impl Args {
    pub fn arbiter(&self) -> ArbiterConfig {
        ArbiterConfig {
            side: self.side,
            poll: Duration::from_millis(self.poll_ms),
            engine_timeout: Duration::from_secs(self.engine_timeout),
            advisor_timeout: Duration::from_secs(self.advisor_timeout),
            max_faults: self.max_faults,
            analysis: !self.no_analysis,
            submission: match self.advise_only {
                true => Submission::Advise,
                false => Submission::Execute,
            },
            acknowledge: match self.confirm_each_move {
                true => Acknowledge::EachMove,
                false => Acknowledge::Never,
            },
            ack_timeout: self.ack_timeout.map(Duration::from_secs),
            preamble: String::from(STRATEGY),
        }
    }
    pub fn advisor(&self) -> AdvisorConfig {
        AdvisorConfig {
            base: self.api_base.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
    pub fn webdriver(&self) -> WebDriverConfig {
        WebDriverConfig {
            server: self.webdriver.clone(),
            browser: self.browser.clone(),
            headless: self.headless,
        }
    }
    pub fn load_delay(&self) -> Duration {
        Duration::from_secs(self.load_delay)
    }
}
