//! Tooltip state machine: HIDDEN/VISIBLE with a cancelable, delayed
//! hide.
//!
//! The hide is modeled as an explicit deadline applied by
//! [`Tooltip::poll`], so the delay and its cancellation are
//! deterministic under test. An in-bounds pointer move cancels any
//! pending hide; an out-of-bounds move or pointer leave (re)schedules
//! one.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipState {
    Hidden,
    Visible,
}

/// What the tooltip shows for one hovered cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub row: usize,
    pub column: usize,
    pub value: f64,
    pub filename: String,
    /// Thumbnail reference (`/image/<dataset>/<filename>`).
    pub image_url: String,
    /// Page position of the tooltip box (pointer + fixed offset).
    pub x: i32,
    pub y: i32,
}

impl TooltipContent {
    pub fn new(
        row: usize,
        column: usize,
        value: f64,
        filename: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            row,
            column,
            value,
            filename: filename.into(),
            image_url: image_url.into(),
            x: 0,
            y: 0,
        }
    }

    /// Fixed 3-decimal formatting, as displayed.
    pub fn value_label(&self) -> String {
        format!("{:.3}", self.value)
    }
}

#[derive(Debug)]
pub struct Tooltip {
    state: TooltipState,
    content: Option<TooltipContent>,
    hide_at: Option<Instant>,
    hide_delay: Duration,
    offset: (i32, i32),
}

impl Tooltip {
    pub fn new(hide_delay: Duration, offset: (i32, i32)) -> Self {
        Self {
            state: TooltipState::Hidden,
            content: None,
            hide_at: None,
            hide_delay,
            offset,
        }
    }

    pub fn state(&self) -> TooltipState {
        self.state
    }

    pub fn content(&self) -> Option<&TooltipContent> {
        self.content.as_ref()
    }

    /// In-bounds pointer move: become visible at the pointer plus the
    /// fixed offset, cancelling any pending hide.
    pub fn show(&mut self, mut content: TooltipContent, page_x: i32, page_y: i32) {
        content.x = page_x + self.offset.0;
        content.y = page_y + self.offset.1;
        self.hide_at = None;
        self.content = Some(content);
        self.state = TooltipState::Visible;
    }

    /// Out-of-bounds move or pointer leave: hide after the configured
    /// delay unless preempted. A repeat call resets the deadline.
    pub fn schedule_hide(&mut self, now: Instant) {
        self.hide_at = Some(now + self.hide_delay);
    }

    /// Applies a due hide. Returns true when a transition happened.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.hide_at = None;
                self.content = None;
                self.state = TooltipState::Hidden;
                true
            }
            _ => false,
        }
    }

    /// Back to construction-fresh state.
    pub fn reset(&mut self) {
        self.state = TooltipState::Hidden;
        self.content = None;
        self.hide_at = None;
    }
}
