//! The counter component: `step` and `count` state plus the derived date
//! and message.
//!
//! Derived values are never stored. [`Counter::display_date`] and
//! [`Counter::message`] are computed from the live state on every call.

pub mod date;
pub mod input;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use date::{DateFormatError, DEFAULT_DATE_FORMAT};

pub const STEP_MIN: i64 = 0;
pub const STEP_MAX: i64 = 10;
pub const DEFAULT_STEP: i64 = 1;
pub const DEFAULT_COUNT: i64 = 0;

/// How the step is adjusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Range slider over `[STEP_MIN, STEP_MAX]`, with a count text field and
    /// a reset button.
    #[default]
    Slider,
    /// Unbounded step adjusted by -1/+1 buttons.
    Buttons,
}

impl Variant {
    pub fn has_count_field(self) -> bool {
        self == Variant::Slider
    }

    pub fn has_reset(self) -> bool {
        self == Variant::Slider
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    variant: Variant,
    step: i64,
    count: i64,
}

impl Counter {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            step: DEFAULT_STEP,
            count: DEFAULT_COUNT,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    /// Absolute step set. The slider cannot leave its bounds, so values
    /// outside them are clamped rather than rejected.
    pub fn set_step(&mut self, value: i64) {
        self.step = match self.variant {
            Variant::Slider => value.clamp(STEP_MIN, STEP_MAX),
            Variant::Buttons => value,
        };
        tracing::debug!(step = self.step, "step set");
    }

    pub fn increment_step(&mut self) {
        self.set_step(self.step.saturating_add(1));
    }

    pub fn decrement_step(&mut self) {
        self.set_step(self.step.saturating_sub(1));
    }

    pub fn increment_count(&mut self) {
        self.count = self.count.saturating_add(self.step);
        tracing::debug!(count = self.count, step = self.step, "count incremented");
    }

    pub fn decrement_count(&mut self) {
        self.count = self.count.saturating_sub(self.step);
        tracing::debug!(count = self.count, step = self.step, "count decremented");
    }

    /// Overwrite `count` from typed text, bypassing `step`. Unparseable text
    /// becomes 0. Returns `false` when the variant has no count field.
    pub fn set_count_direct(&mut self, text: &str) -> bool {
        if !self.variant.has_count_field() {
            return false;
        }
        self.count = input::coerce_count(text);
        tracing::debug!(count = self.count, "count set directly");
        true
    }

    /// Back to `step = 1, count = 0`. Returns `false` when the variant has no
    /// reset control.
    pub fn reset(&mut self) -> bool {
        if !self.variant.has_reset() {
            return false;
        }
        self.step = DEFAULT_STEP;
        self.count = DEFAULT_COUNT;
        tracing::debug!("counter reset");
        true
    }

    /// Whether the reset control is shown.
    pub fn can_reset(&self) -> bool {
        self.variant.has_reset() && (self.count != DEFAULT_COUNT || self.step != DEFAULT_STEP)
    }

    /// `today + count` days; `None` outside the calendar range.
    pub fn display_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        date::offset_date(today, self.count)
    }

    pub fn direction(&self) -> String {
        match self.count {
            0 => "Today is".to_string(),
            n if n > 0 => format!("{} days from today is", n),
            n => format!("{} days ago was", n.unsigned_abs()),
        }
    }

    pub fn message(&self, today: NaiveDate, format: &str) -> String {
        format!(
            "{} {}",
            self.direction(),
            date::format_date(self.display_date(today), format)
        )
    }
}
