//! The game engine as the bridge sees it.
//!
//! [`Engine`] is the typed query/command surface the arbitration loop
//! depends on. [`Scripted`] implements it on top of any [`Script`] channel
//! by evaluating calls against the page's `window.RomgonEngine` object and
//! decoding the JSON it hands back.
mod diagnosis;
mod engine;
mod error;
mod execution;
mod script;
mod scripted;
mod wire;

pub use diagnosis::*;
pub use engine::*;
pub use error::*;
pub use execution::*;
pub use script::*;
pub use scripted::*;
