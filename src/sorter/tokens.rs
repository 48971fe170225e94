//! Pause and cancellation handles shared between the sorter and whoever drives it.
//!
//! Both tokens are cheap to clone and share their state across clones, so a UI
//! can keep one copy and hand the other to a running sort.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::types::{SortItem, Step};

/// Pause duration consulted at every visual step.
///
/// Read fresh on each pause, so changing it mid-sort takes effect on the next step.
#[derive(Debug, Clone, Default)]
pub struct DelayToken {
    millis: Arc<AtomicU64>,
}

impl DelayToken {
    pub fn new(millis: u64) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(millis)),
        }
    }

    pub fn millis(&self) -> u64 {
        self.millis.load(Ordering::Relaxed)
    }

    pub fn set_millis(&self, millis: u64) {
        self.millis.store(millis, Ordering::Relaxed);
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.millis())
    }
}

/// Advisory stop flag. Set by an external controller, only ever read by the sorter.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    requested: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    pub fn is_cancel_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}

/// Yield control for `duration`, then resume.
///
/// A zero duration still yields once to the scheduler.
pub async fn sleep(duration: Duration) {
    if duration.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(duration).await;
    }
}

/// Suspension point between visual steps.
///
/// Called by the partition step after every flag transition with a read-only
/// view of the whole array, which is a consistent snapshot of what the
/// algorithm is doing at that moment.
#[async_trait]
pub trait Pacer<T: Sync>: Send {
    async fn pause(&mut self, step: Step, items: &[SortItem<T>]);
}

/// A bare delay: pause without publishing anything.
#[async_trait]
impl<T: Sync> Pacer<T> for DelayToken {
    async fn pause(&mut self, _step: Step, _items: &[SortItem<T>]) {
        sleep(self.duration()).await;
    }
}
