//! The move advisor: an untrusted free-text oracle asked for one notation per turn.
mod advisor;
mod chat;
mod config;
mod credentials;
mod error;
mod preamble;

pub use advisor::*;
pub use chat::*;
pub use config::*;
pub use credentials::*;
pub use error::*;
pub use preamble::*;
