use crate::core::state::{App, Phase};
use crate::tui::component::Component;
use crate::tui::components::{KeyHints, SortBars, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Block;

pub fn draw_ui(frame: &mut Frame, app: &App) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, hints_area] = layout.areas(frame.area());

    TitleBar::new(
        app.phase,
        app.direction,
        app.delay.millis(),
        app.stats,
        app.status_message.clone(),
    )
    .render(frame, title_area);

    let block = Block::bordered();
    let bars_area = block.inner(main_area);
    frame.render_widget(block, main_area);
    SortBars::new(&app.items, app.max_value(), app.phase == Phase::Finished)
        .render(frame, bars_area);

    KeyHints::new(app.is_sorting()).render(frame, hints_area);
}
