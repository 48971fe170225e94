//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::state::App;
use crate::sorter::{CancellationToken, DelayToken, Direction, Pacer, SortItem, Step};

/// A pacer that never sleeps. Records every step and a snapshot of the array
/// taken at that pause, and can request cancellation after a fixed number of pauses.
#[derive(Default)]
pub struct RecordingPacer {
    pub steps: Vec<Step>,
    pub snapshots: Vec<Vec<SortItem<u32>>>,
    cancel_after: Option<(usize, CancellationToken)>,
}

impl RecordingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels `token` once `pauses` pauses have been taken.
    pub fn cancelling_after(pauses: usize, token: CancellationToken) -> Self {
        Self {
            cancel_after: Some((pauses, token)),
            ..Self::default()
        }
    }

    pub fn compare_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, Step::Compare { .. }))
            .count()
    }

    pub fn swap_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, Step::Swap { .. }))
            .count()
    }
}

#[async_trait]
impl Pacer<u32> for RecordingPacer {
    async fn pause(&mut self, step: Step, items: &[SortItem<u32>]) {
        self.steps.push(step);
        self.snapshots.push(items.to_vec());
        if let Some((limit, token)) = &self.cancel_after
            && self.steps.len() >= *limit
        {
            token.cancel();
        }
    }
}

pub fn items_of(values: &[u32]) -> Vec<SortItem<u32>> {
    SortItem::from_values(values.iter().copied())
}

pub fn values_of(items: &[SortItem<u32>]) -> Vec<u32> {
    items.iter().map(|i| i.value).collect()
}

/// Creates a test App over a fixed array with zero delay.
pub fn test_app() -> App {
    App::new(items_of(&[5, 3, 1, 4, 2]), Direction::Ascending, DelayToken::new(0))
}
