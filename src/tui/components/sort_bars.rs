//! # SortBars Component
//!
//! Draws the array as vertical bars, one per element, coloured by the flags
//! the sorter sets. This is the observer side of the sorter's visual contract.
//!
//! Colour precedence, highest first:
//!
//! ```text
//! pivot     → magenta
//! swapping  → red
//! active    → yellow
//! finished  → green   (whole array, after a completed run)
//! otherwise → cyan
//! ```
//!
//! Each element gets an equal slot of the width. Slots three cells or wider
//! leave a one-cell gap. When there are more elements than columns the tail
//! is clipped.

use crate::sorter::SortItem;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

const BAR_SYMBOL: &str = "█";

pub struct SortBars<'a> {
    pub items: &'a [SortItem<u32>],
    /// Value drawn at full height.
    pub max_value: u32,
    pub finished: bool,
}

impl<'a> SortBars<'a> {
    pub fn new(items: &'a [SortItem<u32>], max_value: u32, finished: bool) -> Self {
        Self {
            items,
            max_value,
            finished,
        }
    }

    fn bar_style(&self, item: &SortItem<u32>) -> Style {
        let color = if item.pivot {
            Color::Magenta
        } else if item.swapping {
            Color::Red
        } else if item.active {
            Color::Yellow
        } else if self.finished {
            Color::Green
        } else {
            Color::Cyan
        };
        Style::default().fg(color)
    }

    /// Bar height in rows; any non-zero value gets at least one row.
    fn bar_height(&self, value: u32, rows: u16) -> u16 {
        if self.max_value == 0 || value == 0 {
            return 0;
        }
        let scaled = (u64::from(value) * u64::from(rows)).div_ceil(u64::from(self.max_value));
        scaled.min(u64::from(rows)) as u16
    }
}

/// Width of one slot and of the bar drawn inside it.
fn slot_layout(width: u16, count: usize) -> (u16, u16) {
    if count == 0 || width == 0 {
        return (0, 0);
    }
    let slot = (usize::from(width) / count).max(1) as u16;
    let bar = if slot >= 3 { slot - 1 } else { slot };
    (slot, bar)
}

impl Component for SortBars<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (slot, bar) = slot_layout(area.width, self.items.len());
        if slot == 0 || area.height == 0 {
            return;
        }

        let buf = frame.buffer_mut();
        for (i, item) in self.items.iter().enumerate() {
            let offset = i * usize::from(slot);
            if offset >= usize::from(area.width) {
                break;
            }
            let x0 = area.x + offset as u16;
            let height = self.bar_height(item.value, area.height);
            let style = self.bar_style(item);
            let bottom = area.y + area.height;

            for x in x0..(x0 + bar).min(area.x + area.width) {
                for y in (bottom - height)..bottom {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_symbol(BAR_SYMBOL).set_style(style);
                    }
                }
            }
        }
    }
}
