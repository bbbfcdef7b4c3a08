use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::counter::{Variant, STEP_MAX, STEP_MIN};
use crate::ui::layout::{self, Hit};
use chrono::Local;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    let actions = match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    };
    state.ensure_focus_visible();
    actions
}

fn handle_tick(state: &mut AppState) {
    state.refresh_today(Local::now().date_naive());
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Mouse(mouse) if state.config.ui.mouse => {
            handle_mouse(state, mouse);
            vec![]
        }
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return vec![Action::Quit],
            KeyCode::Char('r') => {
                press_reset(state);
                return vec![];
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Tab => {
            state.cycle_focus(true);
            return vec![];
        }
        KeyCode::BackTab => {
            state.cycle_focus(false);
            return vec![];
        }
        _ => {}
    }

    // Without a text field, `q` is free to quit
    if key.code == KeyCode::Char('q') && !state.counter.variant().has_count_field() {
        return vec![Action::Quit];
    }

    match state.focus {
        Focus::Step => handle_step_key(state, key),
        Focus::Count => handle_count_key(state, key),
        Focus::Reset => handle_reset_key(state, key),
    }
    vec![]
}

fn handle_step_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') => {
            state.counter.decrement_step();
        }
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('l') => {
            state.counter.increment_step();
        }
        _ if state.counter.variant() == Variant::Slider => match key.code {
            KeyCode::Home => state.counter.set_step(STEP_MIN),
            KeyCode::End => state.counter.set_step(STEP_MAX),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                state.counter.set_step(i64::from(c as u8 - b'0'));
            }
            _ => {}
        },
        _ => {}
    }
}

fn handle_count_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up => press_count(state, true),
        KeyCode::Down => press_count(state, false),
        _ if state.counter.variant().has_count_field() => handle_count_field_key(state, key),
        KeyCode::Char('+') => press_count(state, true),
        KeyCode::Char('-') => press_count(state, false),
        _ => {}
    }
}

/// Editing keys for the count text field. Every edit re-parses the field.
fn handle_count_field_key(state: &mut AppState, key: KeyEvent) {
    let edited = match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            state.count_input.insert_char(c);
            true
        }
        KeyCode::Backspace => {
            state.count_input.delete_back();
            true
        }
        KeyCode::Delete => {
            state.count_input.delete_forward();
            true
        }
        KeyCode::Left => {
            state.count_input.move_left();
            false
        }
        KeyCode::Right => {
            state.count_input.move_right();
            false
        }
        KeyCode::Home => {
            state.count_input.move_home();
            false
        }
        KeyCode::End => {
            state.count_input.move_end();
            false
        }
        KeyCode::Enter => {
            state.sync_count_input();
            false
        }
        _ => false,
    };

    if edited {
        let text = state.count_input.text.clone();
        state.counter.set_count_direct(&text);
    }
}

fn handle_reset_key(state: &mut AppState, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
        press_reset(state);
    }
}

fn press_count(state: &mut AppState, up: bool) {
    if up {
        state.counter.increment_count();
    } else {
        state.counter.decrement_count();
    }
    state.sync_count_input();
}

fn press_reset(state: &mut AppState) {
    if state.counter.can_reset() && state.counter.reset() {
        state.sync_count_input();
        state.dirty = true;
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let app_layout = layout::compute_layout(state.viewport);
    let pos = Position::new(mouse.column, mouse.row);
    let Some(hit) = layout::hit_test(
        &app_layout,
        state.counter.variant(),
        state.counter.can_reset(),
        pos,
    ) else {
        return;
    };

    tracing::debug!(?hit, "click");
    state.dirty = true;
    match hit {
        Hit::Slider(value) => {
            state.focus = Focus::Step;
            state.counter.set_step(value);
        }
        Hit::StepDec => {
            state.focus = Focus::Step;
            state.counter.decrement_step();
        }
        Hit::StepInc => {
            state.focus = Focus::Step;
            state.counter.increment_step();
        }
        Hit::CountDec => {
            state.focus = Focus::Count;
            press_count(state, false);
        }
        Hit::CountInc => {
            state.focus = Focus::Count;
            press_count(state, true);
        }
        Hit::CountField => {
            state.focus = Focus::Count;
            state.count_input.move_end();
        }
        Hit::Reset => press_reset(state),
    }
}
