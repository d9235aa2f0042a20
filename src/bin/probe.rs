//! Probe Binary
//!
//! Checks that the game page exposes the engine script API.

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    romgon_bridge::log();
    romgon_bridge::cli::Cli::probe().await
}
