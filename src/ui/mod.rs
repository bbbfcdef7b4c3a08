mod count_control;
pub mod layout;
mod status_bar;
pub mod step_control;
mod theme;

use crate::app::state::{AppState, Focus};
use crate::counter::Variant;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let layout = layout::compute_layout(frame.area());

    let title = match state.counter.variant() {
        Variant::Slider => " Day Counter ",
        Variant::Buttons => " Day Counter · buttons ",
    };
    let panel = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border());
    frame.render_widget(panel, layout.panel);

    step_control::render(frame, &layout, state);
    count_control::render(frame, &layout, state);
    render_message(frame, layout.message, state);
    if state.counter.can_reset() {
        render_button(frame, layout.reset, "Reset", state.focus == Focus::Reset);
    }
    status_bar::render(frame, layout.status_bar, state);
}

fn render_message(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(state.message(), Theme::message())),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type_for(focused))
        .border_style(Theme::border_for(focused));
    let button = Paragraph::new(label)
        .style(Theme::button(focused))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;

    fn state(variant: Variant) -> AppState {
        let mut config = AppConfig::default();
        config.counter.variant = variant;
        AppState::new(config, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_initial_screen() {
        let s = state(Variant::Slider);
        let screen = draw(&s);
        assert!(screen.contains("Day Counter"));
        assert!(screen.contains("Today is Mon Oct 19 2026"));
        assert!(!screen.contains("Reset"));
    }

    #[test]
    fn test_reset_appears_after_change() {
        let mut s = state(Variant::Slider);
        s.counter.set_step(3);
        s.counter.increment_count();
        s.counter.increment_count();
        s.sync_count_input();
        let screen = draw(&s);
        assert!(screen.contains("6 days from today is Sun Oct 25 2026"));
        assert!(screen.contains("Reset"));
    }

    #[test]
    fn test_negative_count_message() {
        let mut s = state(Variant::Slider);
        s.counter.set_count_direct("-3");
        s.sync_count_input();
        let screen = draw(&s);
        assert!(screen.contains("3 days ago was Fri Oct 16 2026"));
    }

    #[test]
    fn test_buttons_variant_screen() {
        let mut s = state(Variant::Buttons);
        s.counter.increment_step();
        s.counter.increment_count();
        let screen = draw(&s);
        assert!(screen.contains("-1"));
        assert!(screen.contains("+1"));
        assert!(screen.contains("2 days from today is Wed Oct 21 2026"));
        assert!(!screen.contains("Reset"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let s = state(Variant::Slider);
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        terminal.draw(|f| render(f, &s)).unwrap();
    }

    #[test]
    fn test_very_long_draft_keeps_cursor_in_field() {
        let mut s = state(Variant::Slider);
        s.count_input.set_text("9".repeat(70_000));
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, &s)).unwrap();
        let field = layout::compute_layout(Rect::new(0, 0, 80, 24)).count_field;
        let cursor = terminal.get_cursor_position().unwrap();
        assert!(cursor.x < field.right());
        assert_eq!(cursor.y, field.y + 1);
    }
}
