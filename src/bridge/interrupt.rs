use std::sync::Arc;
use tokio::sync::watch;

/// Shared stop flag raced against every suspension point of the loop.
///
/// Clones observe the same flag. Once tripped it stays tripped.
#[derive(Debug, Clone)]
pub struct Interrupt {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl Default for Interrupt {
    fn default() -> Self {
        let (tx, rx) = watch::channel(false);
        Self { tx: Arc::new(tx), rx }
    }
}

impl Interrupt {
    /// An interrupt tripped by Ctrl-C. Must be called inside a runtime.
    pub fn ctrl_c() -> Self {
        let interrupt = Self::default();
        let handle = interrupt.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                println!();
                log::warn!("[interrupt] stop requested, releasing the game");
                handle.trip();
            }
        });
        interrupt
    }
    pub fn trip(&self) {
        self.tx.send_replace(true);
    }
    pub fn tripped(&self) -> bool {
        *self.rx.borrow()
    }
    /// Resolves once tripped; never resolves otherwise.
    pub async fn wait(&self) {
        let mut rx = self.rx.clone();
        if rx.wait_for(|tripped| *tripped).await.is_err() {
            std::future::pending::<()>().await
        }
    }
}
