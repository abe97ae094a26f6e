//! Trailing-edge throttle for high frequency interaction events.

use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle};

/// Interval used for slider drags.
pub const DRAG_THROTTLE_INTERVAL: Duration = Duration::from_millis(200);

/// Buffers pushed values and applies only the latest one at the end of each
/// window. The first value pushed while idle opens a window; the pending value
/// is dropped together with the throttle.
pub struct Throttle<T> {
    tx: mpsc::UnboundedSender<T>,
    task: JoinHandle<()>,
}

impl<T: Send + 'static> Throttle<T> {
    pub fn new(interval: Duration, mut apply: impl FnMut(T) + Send + 'static) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();
        let task = tokio::spawn(async move {
            while let Some(first) = rx.recv().await {
                let mut latest = first;
                tokio::time::sleep(interval).await;
                while let Ok(next) = rx.try_recv() {
                    latest = next;
                }
                apply(latest);
            }
        });
        Self { tx, task }
    }

    pub fn push(&self, value: T) {
        if self.tx.send(value).is_err() {
            tracing::warn!("throttle task has stopped, dropping value");
        }
    }
}

impl<T> Drop for Throttle<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
