//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Sort Task
//!
//! Starting a sort moves a copy of the array into a tokio task. The task owns
//! that copy for the whole run and sorts it in place. At every pause it
//! publishes a snapshot as `Action::Frame`, then sleeps for the live delay.
//! When the sort resolves, the task hands the final array back with
//! `Action::Finished`. Stopping never aborts the task: it flips the shared
//! `CancellationToken` and lets the sort unwind on its own.
//!
//! ## Redraw Strategy
//!
//! - **Sorting**: polls input every ~16ms and redraws whenever frames arrived.
//! - **Idle**: sleeps up to 500ms, only redraws on input or terminal resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::sync::mpsc;
use std::time::Duration;

use async_trait::async_trait;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::sorter::{DelayToken, Pacer, SortItem, Step, quick_sort, sleep};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const SORTING_POLL: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Publishes each pause to the event loop, then waits out the live delay.
pub struct FramePacer {
    delay: DelayToken,
    tx: mpsc::Sender<Action>,
}

impl FramePacer {
    pub fn new(delay: DelayToken, tx: mpsc::Sender<Action>) -> Self {
        Self { delay, tx }
    }
}

#[async_trait]
impl Pacer<u32> for FramePacer {
    async fn pause(&mut self, step: Step, items: &[SortItem<u32>]) {
        let frame = Action::Frame {
            step,
            items: items.to_vec(),
        };
        if self.tx.send(frame).is_err() {
            debug!("Frame dropped: receiver gone");
        }
        sleep(self.delay.duration()).await;
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    info!(
        "TUI starting: {} items, {} ms delay, {}",
        app.items.len(),
        app.delay.millis(),
        app.direction.label()
    );

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> std::io::Result<()> {
    // Channel for actions from the sort task
    let (tx, rx) = mpsc::channel();
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app))?;
            needs_redraw = false;
        }

        let timeout = if app.is_sorting() {
            SORTING_POLL
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = action_for(event, app) else {
                continue;
            };
            if apply(app, action, &tx) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }

        // Handle sort task actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if apply(app, action, &tx) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("TUI exiting");
    Ok(())
}

/// Translate a terminal event into a core action, given the current state.
fn action_for(event: TuiEvent, app: &App) -> Option<Action> {
    match event {
        // Resize just needs a redraw (already flagged by the caller)
        TuiEvent::Resize => None,
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::StartStop if app.is_sorting() => Some(Action::Stop),
        TuiEvent::StartStop => Some(Action::Start),
        TuiEvent::Shuffle => Some(Action::Shuffle),
        TuiEvent::ToggleDirection => Some(Action::ToggleDirection),
        TuiEvent::SpeedUp => Some(Action::SpeedUp),
        TuiEvent::SlowDown => Some(Action::SlowDown),
    }
}

fn apply(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> Effect {
    let effect = update(app, action);
    if effect == Effect::SpawnSort {
        spawn_sort(app, tx.clone());
    }
    effect
}

fn spawn_sort(app: &App, tx: mpsc::Sender<Action>) {
    let Some(stop) = app.cancel.clone() else {
        warn!("Sort requested without a cancellation token");
        return;
    };
    let mut items = app.items.clone();
    let comparator = app.direction.comparator::<u32>();
    let mut pacer = FramePacer::new(app.delay.clone(), tx.clone());

    info!("Spawning sort task over {} items", items.len());
    tokio::spawn(async move {
        quick_sort(&mut items, comparator, &mut pacer, &stop).await;
        let cancelled = stop.is_cancel_requested();
        if tx.send(Action::Finished { items, cancelled }).is_err() {
            warn!("Failed to send Finished: receiver dropped");
        }
    });
}
