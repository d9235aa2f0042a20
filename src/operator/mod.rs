//! The human (or script) supervising the bridge.
mod operator;
mod unattended;

#[cfg(feature = "cli")]
mod console;

pub use operator::*;
pub use unattended::*;

#[cfg(feature = "cli")]
pub use console::*;
