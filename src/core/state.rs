//! # Application State
//!
//! Core business state for sortviz. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── items: Vec<SortItem<u32>>       // latest snapshot of the array
//! ├── direction: Direction            // ascending / descending
//! ├── delay: DelayToken               // shared with the running sort
//! ├── status_message: String          // status bar text
//! ├── phase: Phase                    // idle, sorting, stopping, ...
//! ├── stats: SortStats                // counters for the current run
//! ├── cancel: Option<CancellationToken> // Some while a run is in flight
//! └── rng: StdRng                     // shuffle source
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::core::config::ResolvedConfig;
use crate::sorter::{CancellationToken, DelayToken, Direction, SortItem};

/// Lifecycle of a sort run as seen by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sorting,
    /// Cancellation requested; the task is unwinding.
    Stopping,
    Finished,
    Cancelled,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Idle => "ready",
            Phase::Sorting => "sorting",
            Phase::Stopping => "stopping",
            Phase::Finished => "sorted",
            Phase::Cancelled => "stopped",
        }
    }
}

/// Counters for the current run, derived from the steps the sorter reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
    pub steps: u64,
}

pub struct App {
    pub items: Vec<SortItem<u32>>,
    pub direction: Direction,
    pub delay: DelayToken,
    pub status_message: String,
    pub phase: Phase,
    pub stats: SortStats,
    pub cancel: Option<CancellationToken>,
    rng: StdRng,
}

impl App {
    pub fn new(items: Vec<SortItem<u32>>, direction: Direction, delay: DelayToken) -> Self {
        Self {
            items,
            direction,
            delay,
            status_message: String::from("Press space to sort"),
            phase: Phase::Idle,
            stats: SortStats::default(),
            cancel: None,
            rng: StdRng::seed_from_u64(0),
        }
    }

    /// Builds the initial array from explicit values or a random draw.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let values = match &config.values {
            Some(values) => values.clone(),
            None => (0..config.item_count)
                .map(|_| rng.gen_range(1..=config.max_value))
                .collect(),
        };
        let mut app = Self::new(
            SortItem::from_values(values),
            config.direction,
            DelayToken::new(config.delay_ms),
        );
        app.rng = rng;
        app
    }

    pub fn is_sorting(&self) -> bool {
        matches!(self.phase, Phase::Sorting | Phase::Stopping)
    }

    /// Reorders the current values at random. The multiset is unchanged.
    pub fn shuffle(&mut self) {
        self.items.shuffle(&mut self.rng);
        for item in &mut self.items {
            item.active = false;
            item.swapping = false;
            item.pivot = false;
        }
    }

    pub fn values(&self) -> Vec<u32> {
        self.items.iter().map(|i| i.value).collect()
    }

    /// Largest value in the array, used to scale the bars.
    pub fn max_value(&self) -> u32 {
        self.items.iter().map(|i| i.value).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.phase, Phase::Idle);
        assert!(!app.is_sorting());
        assert!(app.cancel.is_none());
        assert_eq!(app.stats, SortStats::default());
        assert_eq!(app.values(), vec![5, 3, 1, 4, 2]);
    }

    #[test]
    fn test_from_config_uses_explicit_values() {
        let config = ResolvedConfig {
            delay_ms: 10,
            item_count: 99,
            max_value: 100,
            direction: Direction::Descending,
            seed: None,
            values: Some(vec![5, 3, 1]),
        };
        let app = App::from_config(&config);
        assert_eq!(app.values(), vec![5, 3, 1]);
        assert_eq!(app.direction, Direction::Descending);
        assert_eq!(app.delay.millis(), 10);
    }

    #[test]
    fn test_from_config_seed_is_reproducible() {
        let config = ResolvedConfig {
            delay_ms: 0,
            item_count: 32,
            max_value: 50,
            direction: Direction::Ascending,
            seed: Some(1234),
            values: None,
        };
        let a = App::from_config(&config);
        let b = App::from_config(&config);
        assert_eq!(a.values(), b.values());
        assert_eq!(a.items.len(), 32);
        assert!(a.values().iter().all(|&v| (1..=50).contains(&v)));
    }

    #[test]
    fn test_shuffle_keeps_values_and_clears_flags() {
        let mut app = test_app();
        app.items[0].pivot = true;
        app.items[2].active = true;
        app.shuffle();
        let mut values = app.values();
        values.sort();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        assert!(app.items.iter().all(SortItem::is_idle));
    }

    #[test]
    fn test_max_value() {
        assert_eq!(test_app().max_value(), 5);
        let empty = App::new(Vec::new(), Direction::Ascending, DelayToken::new(0));
        assert_eq!(empty.max_value(), 0);
    }
}
