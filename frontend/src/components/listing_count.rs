//! Live count of listings matching the current filters.

use std::sync::Arc;

use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, warn};

use crate::{api::filter_api::CountSource, data_definitions::filter_slices::FilterStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryStatus {
    Loading,
    Ready(u64),
    Failed(String),
}

/// Re-issues the count query whenever the store changes. A query still in
/// flight when the filters change again is dropped, so the status always
/// reflects the latest criteria.
pub struct ListingCount {
    status: watch::Receiver<QueryStatus>,
    task: JoinHandle<()>,
}

impl ListingCount {
    pub fn spawn(store: Arc<FilterStore>, source: Arc<dyn CountSource>) -> Self {
        let (status_tx, status) = watch::channel(QueryStatus::Loading);
        let mut changes = store.subscribe_changes();
        let task = tokio::spawn(async move {
            loop {
                changes.borrow_and_update();
                let criteria = store.criteria();
                status_tx.send_replace(QueryStatus::Loading);
                tokio::select! {
                    result = source.count(&criteria) => {
                        let next = match result {
                            Ok(count) => QueryStatus::Ready(count),
                            Err(e) => {
                                warn!("listing count query failed: {:#}", e);
                                QueryStatus::Failed(format!("{:#}", e))
                            }
                        };
                        status_tx.send_replace(next);
                        if changes.changed().await.is_err() {
                            break;
                        }
                    }
                    changed = changes.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        debug!("filters changed during count query, discarding it");
                    }
                }
            }
        });
        Self { status, task }
    }

    pub fn status(&self) -> QueryStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryStatus> {
        self.status.clone()
    }

    /// Wait until the current query has either succeeded or failed.
    pub async fn settled(&self) -> QueryStatus {
        let mut status = self.status.clone();
        match status.wait_for(|s| *s != QueryStatus::Loading).await {
            Ok(settled) => (*settled).clone(),
            Err(_) => self.status(),
        }
    }
}

impl Drop for ListingCount {
    fn drop(&mut self) {
        self.task.abort();
    }
}
