use super::*;
use crate::bridge::Event;
use crate::bridge::Failure;

/// Operator that never asks: retries every failure, skips every pause,
/// and writes progress to the log.
#[derive(Debug, Default)]
pub struct Unattended;

#[async_trait::async_trait]
impl Operator for Unattended {
    async fn decide(&mut self, failure: &Failure) -> Decision {
        log::info!("[operator] retrying after {}", failure);
        Decision::Proceed
    }
    async fn acknowledge(&mut self) -> Decision {
        Decision::Proceed
    }
    async fn notify(&mut self, event: &Event) {
        log::info!("[bridge] {}", event);
    }
}
