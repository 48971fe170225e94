//! # Actions
//!
//! Everything that can happen in sortviz becomes an `Action`.
//! User presses space? That's `Action::Start`.
//! The running sort pauses on a step? That's `Action::Frame { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state and returns an `Effect` describing any I/O the caller must perform.
//! No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::state::{App, Phase, SortStats};
use crate::sorter::{CancellationToken, SortItem, Step};

/// Delay steps offered by the speed controls, in milliseconds.
pub const DELAY_LADDER: &[u64] = &[0, 1, 2, 5, 10, 20, 50, 100, 200, 500, 1000];

#[derive(Debug)]
pub enum Action {
    Start,
    Stop,
    Shuffle,
    ToggleDirection,
    SpeedUp,
    SlowDown,
    /// The running sort paused after `step`; `items` is the array at that moment.
    Frame {
        step: Step,
        items: Vec<SortItem<u32>>,
    },
    /// The sort task resolved.
    Finished {
        items: Vec<SortItem<u32>>,
        cancelled: bool,
    },
    Quit,
}

/// Side effects requested by `update`.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start a sort task over `app.items` using `app.cancel`.
    SpawnSort,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Start => {
            if app.is_sorting() {
                return Effect::None;
            }
            app.cancel = Some(CancellationToken::new());
            app.phase = Phase::Sorting;
            app.stats = SortStats::default();
            app.status_message = format!("Sorting {}...", app.direction.label());
            info!("Starting sort over {} items", app.items.len());
            Effect::SpawnSort
        }
        Action::Stop => {
            if app.phase == Phase::Sorting {
                if let Some(token) = &app.cancel {
                    token.cancel();
                }
                app.phase = Phase::Stopping;
                app.status_message = String::from("Stopping...");
                info!("Stop requested");
            }
            Effect::None
        }
        Action::Shuffle => {
            if app.is_sorting() {
                app.status_message = String::from("Stop the sort before shuffling");
                return Effect::None;
            }
            app.shuffle();
            app.phase = Phase::Idle;
            app.stats = SortStats::default();
            app.status_message = String::from("Shuffled");
            Effect::None
        }
        Action::ToggleDirection => {
            if app.is_sorting() {
                app.status_message = String::from("Direction is fixed while sorting");
                return Effect::None;
            }
            app.direction = app.direction.toggle();
            app.status_message = format!("Direction: {}", app.direction.label());
            Effect::None
        }
        Action::SpeedUp => {
            let ms = faster(app.delay.millis());
            app.delay.set_millis(ms);
            app.status_message = format!("Delay: {ms} ms");
            Effect::None
        }
        Action::SlowDown => {
            let ms = slower(app.delay.millis());
            app.delay.set_millis(ms);
            app.status_message = format!("Delay: {ms} ms");
            Effect::None
        }
        Action::Frame { step, items } => {
            // Frames still queued from a finished run are stale
            if !app.is_sorting() {
                debug!("Dropping stale frame {:?}", step);
                return Effect::None;
            }
            app.items = items;
            app.stats.steps += 1;
            match step {
                Step::Compare { .. } => app.stats.comparisons += 1,
                Step::Swap { .. } => app.stats.swaps += 1,
                Step::Swapped { .. } => {}
            }
            Effect::None
        }
        Action::Finished { items, cancelled } => {
            app.items = items;
            app.cancel = None;
            if cancelled {
                app.phase = Phase::Cancelled;
                app.status_message = String::from("Stopped");
            } else {
                app.phase = Phase::Finished;
                app.status_message = format!(
                    "Sorted: {} comparisons, {} swaps",
                    app.stats.comparisons, app.stats.swaps
                );
            }
            info!(
                "Sort finished (cancelled={}): {:?}",
                cancelled, app.stats
            );
            Effect::None
        }
        Action::Quit => {
            if let Some(token) = &app.cancel {
                token.cancel();
            }
            Effect::Quit
        }
    }
}

/// Next smaller delay on the ladder (or the same value at the bottom).
pub fn faster(ms: u64) -> u64 {
    DELAY_LADDER
        .iter()
        .rev()
        .copied()
        .find(|&step| step < ms)
        .unwrap_or(0)
}

/// Next larger delay on the ladder (or the top rung).
pub fn slower(ms: u64) -> u64 {
    let top = DELAY_LADDER[DELAY_LADDER.len() - 1];
    DELAY_LADDER
        .iter()
        .copied()
        .find(|&step| step > ms)
        .unwrap_or(top.max(ms))
}
