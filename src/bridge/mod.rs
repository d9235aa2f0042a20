//! Turn arbitration: decide whose turn it is, ask the advisor, keep it honest.
//!
//! The [`Arbiter`] owns the cycle. Its stages are small free-standing pieces
//! ([`extract`], [`Prompt`], [`resolve`]) so they can be exercised without
//! a live engine.
mod arbiter;
mod config;
mod event;
mod extract;
mod fault;
mod interrupt;
mod outcome;
mod phase;
mod prompt;
mod resolve;

#[cfg(test)]
pub(crate) mod fakes;

pub use arbiter::*;
pub use config::*;
pub use event::*;
pub use extract::*;
pub use fault::*;
pub use interrupt::*;
pub use outcome::*;
pub use phase::*;
pub use prompt::*;
pub use resolve::*;
