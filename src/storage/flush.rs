use crate::storage::traits::StateStorage;
use log::warn;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

enum Job {
    Write(String),
    Ack(oneshot::Sender<()>),
}

/// Write-behind persistence worker for one storage key.
///
/// Mutations stay synchronous: they hand the latest serialized snapshot to
/// `schedule` and return. A background task performs the writes in order.
/// `flush` resolves once every previously scheduled write has landed, which
/// is the hook tests use to assert durability deterministically.
///
/// Dropping the flusher aborts the worker; a snapshot scheduled but not yet
/// written is lost, mirroring the accepted crash window between mutation
/// and storage flush.
pub struct Flusher {
    tx: mpsc::UnboundedSender<Job>,
    worker: JoinHandle<()>,
}

impl Flusher {
    /// Spawns the worker task. Must be called from within a tokio runtime.
    pub fn spawn(storage: Arc<dyn StateStorage>, key: &'static str) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                match job {
                    Job::Write(snapshot) => {
                        if let Err(err) = storage.save(key, snapshot).await {
                            warn!("failed to persist '{key}': {err}");
                        }
                    }
                    Job::Ack(done) => {
                        let _ = done.send(());
                    }
                }
            }
        });
        Self { tx, worker }
    }

    /// Queues the latest snapshot for writing. Never blocks.
    pub fn schedule(&self, snapshot: String) {
        let _ = self.tx.send(Job::Write(snapshot));
    }

    /// Waits until all writes scheduled before this call have been handed to
    /// storage.
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(Job::Ack(done_tx)).is_ok() {
            let _ = done_rx.await;
        }
    }
}

impl Drop for Flusher {
    fn drop(&mut self) {
        self.worker.abort();
    }
}
