use crate::config::AppConfig;
use crate::counter::Counter;
use chrono::NaiveDate;
use ratatui::layout::Rect;

/// Editing state of the count text field.
#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new(text: String) -> Self {
        let cursor = text.len();
        Self { text, cursor }
    }

    /// Replace the text and move the cursor to the end.
    pub fn set_text(&mut self, text: String) {
        self.cursor = text.len();
        self.text = text;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Display width of the text before the cursor.
    pub fn cursor_column(&self) -> usize {
        unicode_width::UnicodeWidthStr::width(&self.text[..self.cursor])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Step,
    Count,
    Reset,
}

pub struct AppState {
    pub config: AppConfig,
    pub counter: Counter,
    pub count_input: InputState,
    pub focus: Focus,
    /// Terminal area, kept for mouse hit-testing.
    pub viewport: Rect,
    /// Date the derived display date is offset from.
    pub today: NaiveDate,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, today: NaiveDate) -> Self {
        let counter = Counter::new(config.counter.variant);
        let count_input = InputState::new(counter.count().to_string());
        Self {
            config,
            counter,
            count_input,
            focus: Focus::Count,
            viewport: Rect::default(),
            today,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn date_format(&self) -> &str {
        &self.config.ui.date_format
    }

    /// The derived message for the current count and date.
    pub fn message(&self) -> String {
        self.counter.message(self.today, self.date_format())
    }

    /// Returns true when the date actually changed.
    pub fn refresh_today(&mut self, today: NaiveDate) -> bool {
        if self.today == today {
            return false;
        }
        tracing::info!(%today, "date changed");
        self.today = today;
        self.dirty = true;
        true
    }

    /// Show the current count in the text field, discarding any draft.
    pub fn sync_count_input(&mut self) {
        self.count_input.set_text(self.counter.count().to_string());
    }

    /// Controls that can take focus, in tab order.
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Step, Focus::Count];
        if self.counter.can_reset() {
            order.push(Focus::Reset);
        }
        order
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (idx + 1) % order.len()
        } else if idx == 0 {
            order.len() - 1
        } else {
            idx - 1
        };
        self.focus = order[next];
        self.dirty = true;
    }

    /// Move focus off the reset button once it is hidden.
    pub fn ensure_focus_visible(&mut self) {
        if self.focus == Focus::Reset && !self.counter.can_reset() {
            self.focus = Focus::Count;
        }
    }

    pub fn status_line(&self) -> String {
        format!(
            "step {}  count {}",
            self.counter.step(),
            self.counter.count()
        )
    }
}
