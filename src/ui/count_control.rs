use crate::app::state::*;
use crate::ui::layout::CounterLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, layout: &CounterLayout, state: &AppState) {
    let focused = state.focus == Focus::Count;

    super::render_button(frame, layout.count_dec, "-", focused);
    super::render_button(frame, layout.count_inc, "+", focused);

    let block = Block::default()
        .title(" Count ")
        .title_style(if focused {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_type(Theme::border_type_for(focused))
        .border_style(Theme::border_for(focused))
        .padding(Padding::horizontal(1));

    let area = layout.count_field;
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !state.counter.variant().has_count_field() {
        let paragraph = Paragraph::new(state.counter.count().to_string())
            .style(Theme::value())
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, inner);
        return;
    }

    let paragraph = Paragraph::new(state.count_input.text.as_str()).style(Theme::input_text());
    frame.render_widget(paragraph, inner);

    if focused && inner.width > 0 {
        let column = u16::try_from(state.count_input.cursor_column()).unwrap_or(u16::MAX);
        let cursor_x = inner.x.saturating_add(column);
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}
