use crate::counter::Variant;
use crate::ui::step_control;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

pub const PANEL_WIDTH: u16 = 52;
pub const PANEL_HEIGHT: u16 = 14;
const RESET_WIDTH: u16 = 11;

pub struct CounterLayout {
    pub panel: Rect,
    pub step: Rect,
    pub step_dec: Rect,
    pub step_value: Rect,
    pub step_inc: Rect,
    pub slider_track: Rect,
    pub slider_label: Rect,
    pub count_dec: Rect,
    pub count_field: Rect,
    pub count_inc: Rect,
    pub message: Rect,
    pub reset: Rect,
    pub status_bar: Rect,
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Slider(i64),
    StepDec,
    StepInc,
    CountDec,
    CountField,
    CountInc,
    Reset,
}

pub fn compute_layout(area: Rect) -> CounterLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let panel = centered(main_chunks[0], PANEL_WIDTH, PANEL_HEIGHT);
    let status_bar = main_chunks[1];

    let inner = panel.inner(Margin::new(1, 1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Step control
            Constraint::Length(3), // Count control
            Constraint::Length(3), // Message
            Constraint::Length(3), // Reset
            Constraint::Min(0),
        ])
        .split(inner);

    let step = rows[0];
    let step_buttons = button_row(step, 8);
    let slider_line = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),    // Track
            Constraint::Length(4), // Value label
        ])
        .split(step.inner(Margin::new(1, 1)));

    let count_buttons = button_row(rows[1], 5);

    CounterLayout {
        panel,
        step,
        step_dec: step_buttons[0],
        step_value: step_buttons[1],
        step_inc: step_buttons[2],
        slider_track: slider_line[0],
        slider_label: slider_line[1],
        count_dec: count_buttons[0],
        count_field: count_buttons[1],
        count_inc: count_buttons[2],
        message: rows[2],
        reset: centered(rows[3], RESET_WIDTH, 3),
        status_bar,
    }
}

/// Resolve a click at `pos` to the control under it. Hidden controls never
/// match.
pub fn hit_test(
    layout: &CounterLayout,
    variant: Variant,
    reset_visible: bool,
    pos: Position,
) -> Option<Hit> {
    match variant {
        Variant::Slider => {
            if layout.slider_track.contains(pos) {
                let offset = pos.x - layout.slider_track.x;
                return Some(Hit::Slider(step_control::value_at(
                    offset,
                    layout.slider_track.width,
                )));
            }
        }
        Variant::Buttons => {
            if layout.step_dec.contains(pos) {
                return Some(Hit::StepDec);
            }
            if layout.step_inc.contains(pos) {
                return Some(Hit::StepInc);
            }
        }
    }

    if layout.count_dec.contains(pos) {
        return Some(Hit::CountDec);
    }
    if layout.count_inc.contains(pos) {
        return Some(Hit::CountInc);
    }
    if variant.has_count_field() && layout.count_field.contains(pos) {
        return Some(Hit::CountField);
    }
    if reset_visible && layout.reset.contains(pos) {
        return Some(Hit::Reset);
    }
    None
}

fn button_row(area: Rect, button_width: u16) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(button_width),
            Constraint::Min(1),
            Constraint::Length(button_width),
        ])
        .split(area)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> CounterLayout {
        compute_layout(Rect::new(0, 0, 80, 24))
    }

    fn center(r: Rect) -> Position {
        Position::new(r.x + r.width / 2, r.y + r.height / 2)
    }

    #[test]
    fn test_panel_is_centered() {
        let l = layout();
        assert_eq!(l.panel.width, PANEL_WIDTH);
        assert_eq!(l.panel.height, PANEL_HEIGHT);
        assert_eq!(l.panel.x, (80 - PANEL_WIDTH) / 2);
        assert_eq!(l.status_bar, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_small_terminal_does_not_overflow() {
        let l = compute_layout(Rect::new(0, 0, 20, 6));
        assert!(l.panel.width <= 20);
        assert!(l.panel.height <= 5);
    }

    #[test]
    fn test_hit_buttons() {
        let l = layout();
        assert_eq!(
            hit_test(&l, Variant::Slider, false, center(l.count_dec)),
            Some(Hit::CountDec)
        );
        assert_eq!(
            hit_test(&l, Variant::Slider, false, center(l.count_inc)),
            Some(Hit::CountInc)
        );
        assert_eq!(
            hit_test(&l, Variant::Slider, false, center(l.count_field)),
            Some(Hit::CountField)
        );
        assert_eq!(
            hit_test(&l, Variant::Buttons, false, center(l.count_field)),
            None
        );
        assert_eq!(
            hit_test(&l, Variant::Buttons, false, center(l.step_dec)),
            Some(Hit::StepDec)
        );
        assert_eq!(
            hit_test(&l, Variant::Buttons, false, center(l.step_inc)),
            Some(Hit::StepInc)
        );
    }

    #[test]
    fn test_hit_reset_only_when_visible() {
        let l = layout();
        assert_eq!(hit_test(&l, Variant::Slider, false, center(l.reset)), None);
        assert_eq!(
            hit_test(&l, Variant::Slider, true, center(l.reset)),
            Some(Hit::Reset)
        );
    }

    #[test]
    fn test_hit_slider_ends() {
        let l = layout();
        let track = l.slider_track;
        assert_eq!(
            hit_test(&l, Variant::Slider, false, Position::new(track.x, track.y)),
            Some(Hit::Slider(0))
        );
        assert_eq!(
            hit_test(
                &l,
                Variant::Slider,
                false,
                Position::new(track.right() - 1, track.y)
            ),
            Some(Hit::Slider(10))
        );
        assert_eq!(
            hit_test(&l, Variant::Buttons, false, center(l.step_value)),
            None
        );
    }
}
