use crate::app::state::*;
use crate::counter::Variant;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

fn key_hints(state: &AppState) -> &'static str {
    match (state.focus, state.counter.variant()) {
        (Focus::Step, Variant::Slider) => "←/→ slide  0-9 set  Tab next  Esc quit",
        (Focus::Step, Variant::Buttons) => "←/→ -1/+1  Tab next  q quit",
        (Focus::Count, Variant::Slider) => "↑/↓ +/-  type to edit  ^R reset  Esc quit",
        (Focus::Count, Variant::Buttons) => "↑/↓ +/-  Tab next  q quit",
        (Focus::Reset, _) => "Enter reset  Tab next  Esc quit",
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let focus_name = match state.focus {
        Focus::Step => "STEP",
        Focus::Count => "COUNT",
        Focus::Reset => "RESET",
    };
    let hints = key_hints(state);

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let tail = format!(" {}  [{}] ", hints, focus_name);
    let remaining = (area.width as usize).saturating_sub(used + tail.chars().count());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(tail, Theme::key_hint()));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
