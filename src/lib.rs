//! Turn-arbitration bridge between a live Romgon game and a chat-completion move advisor.
//!
//! The human plays one colour in the browser; the bridge plays the other by
//! reading the position through the page's `window.RomgonEngine` script API,
//! asking a remote model for a move, checking it against the engine's own
//! legal-move list and submitting the result.
//!
//! ## Modules
//!
//! - [`board`]: position snapshots, pieces, moves and analysis values
//! - [`remote`]: the [`remote::Engine`] interface and its script-channel adapter
//! - [`webdriver`]: W3C WebDriver session used as the script channel
//! - [`advisor`]: the [`advisor::Advisor`] interface and chat-completion client
//! - [`bridge`]: extraction, prompt rendering, move resolution and the [`bridge::Arbiter`] loop
//! - [`operator`]: retry decisions, acknowledgments and progress reporting

pub mod advisor;
pub mod board;
pub mod bridge;
#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod config;
pub mod operator;
pub mod remote;
pub mod webdriver;

// ============================================================================
// ENGINE INTERFACE
// ============================================================================
/// Global the game page exposes its script API under.
pub const ENGINE_GLOBAL: &str = "window.RomgonEngine";
/// Page the human plays on.
pub const GAME_URL: &str = "http://localhost:5500/public/index.html";
/// Seconds to let the page load before probing for the engine.
pub const LOAD_DELAY_SECS: u64 = 5;
/// Milliseconds between turn polls while the human is thinking.
pub const POLL_INTERVAL_MS: u64 = 2000;
/// Seconds any single engine call may take.
pub const ENGINE_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// WEBDRIVER
// ============================================================================
/// chromedriver's default listen address.
pub const WEBDRIVER_URL: &str = "http://localhost:9515";
/// Browser requested in the new-session capabilities.
pub const WEBDRIVER_BROWSER: &str = "chrome";

// ============================================================================
// ADVISORY AGENT
// ============================================================================
/// Environment variable holding the advisory service key.
pub const CREDENTIAL_VAR: &str = "OPENAI_API_KEY";
/// OpenAI-compatible API root.
pub const ADVISOR_URL: &str = "https://api.openai.com/v1";
/// Chat model asked for moves.
pub const ADVISOR_MODEL: &str = "gpt-4o-mini";
/// Sampling temperature. Nonzero, so identical prompts may get different answers.
pub const ADVISOR_TEMPERATURE: f32 = 0.7;
/// Completion budget; a notation needs only a handful of tokens.
pub const ADVISOR_MAX_TOKENS: u32 = 50;
/// Seconds a single advisory call may take.
pub const ADVISOR_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// ARBITRATION
// ============================================================================
/// Legal notations quoted in each prompt.
pub const SAMPLE_MOVES: usize = 5;
/// Consecutive faults after which the loop stops without asking.
pub const MAX_CONSECUTIVE_FAULTS: usize = 3;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
