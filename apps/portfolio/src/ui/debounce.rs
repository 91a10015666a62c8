use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Delays work until calls stop arriving for `wait`.
/// Each `call` cancels the still-pending one, so a burst runs once.
pub struct Debouncer {
    wait: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    pub fn call<F>(&mut self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let wait = self.wait;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            work.await;
        }));
    }

    /// Waits for the pending call, if any, to run.
    pub async fn flush(&mut self) {
        if let Some(handle) = self.pending.take() {
            // A cancelled or panicked task has nothing left to run.
            let _ = handle.await;
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
