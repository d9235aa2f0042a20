//! Bridge Binary
//!
//! Opens the game in a browser and lets a chat model play one side.
//!
//! The runtime is shut down without waiting on the blocking pool, where an
//! abandoned acknowledgment prompt may still be reading the terminal.

fn main() -> anyhow::Result<()> {
    romgon_bridge::log();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(romgon_bridge::cli::Cli::run());
    runtime.shutdown_background();
    result
}
