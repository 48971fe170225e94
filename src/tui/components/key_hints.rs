//! # KeyHints Component
//!
//! One-line footer listing the key bindings that apply right now.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

pub struct KeyHints {
    pub sorting: bool,
}

impl KeyHints {
    pub fn new(sorting: bool) -> Self {
        Self { sorting }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.sorting {
            &[("space", "stop"), ("+/-", "speed"), ("q", "quit")]
        } else {
            &[
                ("space", "sort"),
                ("s", "shuffle"),
                ("d", "direction"),
                ("+/-", "speed"),
                ("q", "quit"),
            ]
        }
    }
}

impl Component for KeyHints {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Yellow);
        let label_style = Style::default().fg(Color::DarkGray);

        let spans: Vec<Span> = self
            .hints()
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(format!(" {key}"), key_style),
                    Span::styled(format!(" {label} "), label_style),
                ]
            })
            .collect();

        frame.render_widget(Line::from(spans), area);
    }
}
