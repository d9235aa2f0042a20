//! Browser automation over the W3C WebDriver HTTP protocol.
//!
//! A [`Session`] is the bridge's [`crate::remote::Script`] channel: it opens
//! the game page in a real browser and evaluates engine calls inside it.
mod config;
mod protocol;
mod session;

pub use config::*;
pub use session::*;
