//! # TitleBar Component
//!
//! Top status bar showing what the sort is doing.
//!
//! ## Responsibilities
//!
//! - Display the run phase and sort direction
//! - Display the live step delay
//! - Display comparison and swap counters for the current run
//! - Display transient status messages ("Shuffled", "Delay: 20 ms")
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"sortviz [sorting] ascending | 20 ms | cmp 12 swp 4 | Delay: 20 ms"`
//! 2. **Default**: `"sortviz [ready] ascending | 50 ms | cmp 0 swp 0"`
//!
//! Counters sit before the status message so they stay visible on narrow terminals.

use crate::core::state::{Phase, SortStats};
use crate::sorter::Direction;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component.
pub struct TitleBar {
    pub phase: Phase,
    pub direction: Direction,
    pub delay_ms: u64,
    pub stats: SortStats,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(
        phase: Phase,
        direction: Direction,
        delay_ms: u64,
        stats: SortStats,
        status_message: String,
    ) -> Self {
        Self {
            phase,
            direction,
            delay_ms,
            stats,
            status_message,
        }
    }

    fn phase_style(&self) -> Style {
        match self.phase {
            Phase::Idle => Style::default().fg(Color::Gray),
            Phase::Sorting => Style::default().fg(Color::Yellow),
            Phase::Stopping => Style::default().fg(Color::Red),
            Phase::Finished => Style::default().fg(Color::Green),
            Phase::Cancelled => Style::default().fg(Color::Red).add_modifier(Modifier::DIM),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let summary = format!(
            " {} | {} ms | cmp {} swp {}",
            self.direction.label(),
            self.delay_ms,
            self.stats.comparisons,
            self.stats.swaps
        );

        let mut spans = vec![
            Span::styled("sortviz ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("[{}]", self.phase.label()), self.phase_style()),
            Span::raw(summary),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
