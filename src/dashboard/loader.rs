//! Dashboard Loader
//!
//! Issues the five slot requests for a mount. Requests run as independent
//! tasks with no ordering between them; each completion writes only its own
//! slot and publishes a fresh snapshot to the mount's watchers.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::source::{DataSource, FetchError, FetchResult};
use super::state::{DashboardState, Slot, SlotKind};
use crate::config::TargetsConfig;

/// Loads dashboard state from a data source
pub struct Loader {
    source: Arc<dyn DataSource>,
    targets: TargetsConfig,
    mounts: AtomicU64,
}

impl Loader {
    pub fn new(source: Arc<dyn DataSource>, targets: TargetsConfig) -> Self {
        Self {
            source,
            targets,
            mounts: AtomicU64::new(0),
        }
    }

    pub fn targets(&self) -> &TargetsConfig {
        &self.targets
    }

    /// Number of mounts started so far
    pub fn mount_count(&self) -> u64 {
        self.mounts.load(Ordering::Relaxed)
    }

    /// Mount once and wait until every slot has an outcome
    pub async fn load(&self) -> DashboardState {
        let mut mount = self.mount();
        mount.settled().await
    }

    /// Start a new mount: five fresh requests, nothing reused from earlier mounts
    pub fn mount(&self) -> Mount {
        let id = self.mounts.fetch_add(1, Ordering::Relaxed) + 1;
        let (tx, rx) = watch::channel(DashboardState::new());
        let tx = Arc::new(tx);

        tracing::debug!(mount = id, "Mounting dashboard");

        let mut tasks = Vec::with_capacity(SlotKind::ALL.len());

        let source = Arc::clone(&self.source);
        let address = self.owned_target(SlotKind::Token);
        tasks.push(spawn_slot(
            &tx,
            id,
            SlotKind::Token,
            async move {
                match address {
                    Some(address) => source.token(&address).await,
                    None => Err(unconfigured(SlotKind::Token)),
                }
            },
            |state, slot| state.token = slot,
        ));

        let source = Arc::clone(&self.source);
        tasks.push(spawn_slot(
            &tx,
            id,
            SlotKind::Prediction,
            async move { source.prediction().await },
            |state, slot| state.prediction = slot,
        ));

        let source = Arc::clone(&self.source);
        let address = self.owned_target(SlotKind::Wallet);
        tasks.push(spawn_slot(
            &tx,
            id,
            SlotKind::Wallet,
            async move {
                match address {
                    Some(address) => source.wallet(&address).await,
                    None => Err(unconfigured(SlotKind::Wallet)),
                }
            },
            |state, slot| state.wallet = slot,
        ));

        let source = Arc::clone(&self.source);
        let query = self.owned_target(SlotKind::Sentiment);
        tasks.push(spawn_slot(
            &tx,
            id,
            SlotKind::Sentiment,
            async move {
                match query {
                    Some(query) => source.sentiment(&query).await,
                    None => Err(unconfigured(SlotKind::Sentiment)),
                }
            },
            |state, slot| state.sentiment = slot,
        ));

        let source = Arc::clone(&self.source);
        let address = self.owned_target(SlotKind::Nft);
        tasks.push(spawn_slot(
            &tx,
            id,
            SlotKind::Nft,
            async move {
                match address {
                    Some(address) => source.nft(&address).await,
                    None => Err(unconfigured(SlotKind::Nft)),
                }
            },
            |state, slot| state.nft = slot,
        ));

        Mount { id, rx, tasks }
    }

    fn owned_target(&self, slot: SlotKind) -> Option<String> {
        self.targets.target(slot).map(str::to_string)
    }
}

fn unconfigured(slot: SlotKind) -> FetchError {
    FetchError::Unconfigured { slot }
}

/// Run one slot request and write its outcome into that slot only
fn spawn_slot<T, F>(
    tx: &Arc<watch::Sender<DashboardState>>,
    mount: u64,
    kind: SlotKind,
    fetch: F,
    apply: fn(&mut DashboardState, Slot<T>),
) -> JoinHandle<()>
where
    T: Send + 'static,
    F: Future<Output = FetchResult<T>> + Send + 'static,
{
    let tx = Arc::clone(tx);
    tokio::spawn(async move {
        let result = fetch.await;

        match &result {
            Ok(_) => tracing::debug!(mount, slot = %kind, "Slot loaded"),
            Err(FetchError::Unconfigured { .. }) => {
                tracing::info!(mount, slot = %kind, "Slot skipped: no address configured")
            }
            Err(e) => tracing::warn!(mount, slot = %kind, error = %e, "Slot fetch failed"),
        }

        let slot = Slot::from(result);
        tx.send_modify(move |state| apply(state, slot));
    })
}

/// A single mount of the dashboard
///
/// Dropping the mount aborts requests that have not completed.
pub struct Mount {
    id: u64,
    rx: watch::Receiver<DashboardState>,
    tasks: Vec<JoinHandle<()>>,
}

impl Mount {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Current state without waiting
    pub fn snapshot(&self) -> DashboardState {
        self.rx.borrow().clone()
    }

    /// Wait for the next slot update. Returns `None` once all requests are done
    /// and every update has been observed.
    pub async fn changed(&mut self) -> Option<DashboardState> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Wait until no slot is pending
    pub async fn settled(&mut self) -> DashboardState {
        loop {
            {
                let state = self.rx.borrow_and_update();
                if state.is_settled() {
                    return state.clone();
                }
            }

            if self.rx.changed().await.is_err() {
                return self.rx.borrow().clone();
            }
        }
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}
