use crate::app::state::*;
use crate::counter::{Variant, STEP_MAX, STEP_MIN};
use crate::ui::layout::CounterLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const SPAN: i64 = STEP_MAX - STEP_MIN;

/// Column of the slider knob for `step` on a track `width` cells wide.
pub fn knob_position(step: i64, width: u16) -> u16 {
    if width <= 1 {
        return 0;
    }
    let last = i64::from(width - 1);
    let offset = step.clamp(STEP_MIN, STEP_MAX) - STEP_MIN;
    ((offset * last * 2 + SPAN) / (SPAN * 2)) as u16
}

/// Slider value under column `offset` of a track `width` cells wide.
pub fn value_at(offset: u16, width: u16) -> i64 {
    if width <= 1 {
        return STEP_MIN;
    }
    let last = i64::from(width - 1);
    let offset = i64::from(offset).min(last);
    STEP_MIN + (offset * SPAN * 2 + last) / (last * 2)
}

/// Text rendering of the slider track, e.g. `━━━●───────`.
pub fn slider_track(step: i64, width: u16) -> String {
    let knob = knob_position(step, width) as usize;
    let width = width as usize;
    let mut track = String::with_capacity(width * 3);
    for i in 0..width {
        track.push(match i.cmp(&knob) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        });
    }
    track
}

pub fn render(frame: &mut Frame, layout: &CounterLayout, state: &AppState) {
    let focused = state.focus == Focus::Step;
    match state.counter.variant() {
        Variant::Slider => render_slider(frame, layout, state, focused),
        Variant::Buttons => render_buttons(frame, layout, state, focused),
    }
}

fn render_slider(frame: &mut Frame, layout: &CounterLayout, state: &AppState, focused: bool) {
    let block = Block::default()
        .title(" Step ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_for(focused))
        .border_style(Theme::border_for(focused));
    frame.render_widget(block, layout.step);

    let step = state.counter.step();
    let track = slider_track(step, layout.slider_track.width);
    frame.render_widget(
        Paragraph::new(track).style(Theme::slider(focused)),
        layout.slider_track,
    );
    frame.render_widget(
        Paragraph::new(format!("{:>3}", step))
            .style(Theme::value())
            .alignment(Alignment::Right),
        layout.slider_label,
    );
}

fn render_buttons(frame: &mut Frame, layout: &CounterLayout, state: &AppState, focused: bool) {
    super::render_button(frame, layout.step_dec, "-1", focused);
    super::render_button(frame, layout.step_inc, "+1", focused);

    let block = Block::default()
        .title(" Step ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_for(focused))
        .border_style(Theme::border_for(focused));
    let value = Paragraph::new(state.counter.step().to_string())
        .style(Theme::value())
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(value, layout.step_value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knob_ends() {
        assert_eq!(knob_position(0, 44), 0);
        assert_eq!(knob_position(10, 44), 43);
        assert_eq!(knob_position(5, 11), 5);
        assert_eq!(knob_position(3, 1), 0);
    }

    #[test]
    fn test_click_returns_knob_value() {
        for width in [11u16, 20, 44, 80] {
            for step in STEP_MIN..=STEP_MAX {
                assert_eq!(value_at(knob_position(step, width), width), step);
            }
        }
    }

    #[test]
    fn test_value_at_clamps() {
        assert_eq!(value_at(0, 44), 0);
        assert_eq!(value_at(43, 44), 10);
        assert_eq!(value_at(500, 44), 10);
        assert_eq!(value_at(7, 0), 0);
    }

    #[test]
    fn test_slider_track() {
        assert_eq!(slider_track(0, 5), "●────");
        assert_eq!(slider_track(10, 5), "━━━━●");
        assert_eq!(slider_track(5, 11), "━━━━━●─────");
        assert_eq!(slider_track(5, 11).chars().count(), 11);
    }
}
