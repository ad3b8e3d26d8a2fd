//! Array visualizer
//!
//! Indexed insert and delete with bounds checks, plus an "access" action that
//! highlights one cell for a fixed duration without touching the buffer.

use super::checked_index;
use crate::engine::controls::{button, numeric_input, Action, ControlDescriptor, ControlId};
use crate::engine::frame::{expire_highlight, FrameLayout, RenderFrame, TimedHighlight};
use crate::engine::mount::ControlPanel;
use std::time::{Duration, Instant};

pub const VALUE_INPUT: ControlId = ControlId("arr-input");
pub const INDEX_INPUT: ControlId = ControlId("arr-idx");
pub const INSERT_BUTTON: ControlId = ControlId("arr-insert");
pub const DELETE_BUTTON: ControlId = ControlId("arr-delete");
pub const ACCESS_BUTTON: ControlId = ControlId("arr-access");

pub const INITIAL_DATA: [i64; 5] = [10, 20, 30, 40, 50];

#[derive(Debug, Clone)]
pub struct ArrayWidget {
    data: Vec<i64>,
    highlight: Option<TimedHighlight>,
    highlight_duration: Duration,
}

impl ArrayWidget {
    pub fn new(highlight_duration: Duration) -> Self {
        Self::with_data(INITIAL_DATA.to_vec(), highlight_duration)
    }

    pub fn with_data(data: Vec<i64>, highlight_duration: Duration) -> Self {
        ArrayWidget {
            data,
            highlight: None,
            highlight_duration,
        }
    }

    pub fn controls() -> Vec<ControlDescriptor> {
        vec![
            numeric_input(VALUE_INPUT, "Value", 60),
            numeric_input(INDEX_INPUT, "Index", 2),
            button(INSERT_BUTTON, Action::Insert),
            button(DELETE_BUTTON, Action::Delete),
            button(ACCESS_BUTTON, Action::Access),
        ]
    }

    pub fn data(&self) -> &[i64] {
        &self.data
    }

    /// Insert `value` before `index`. Valid for `0 <= index <= len`.
    pub fn insert(&mut self, value: i64, index: i64) -> bool {
        let Some(idx) = checked_index(index, self.data.len() + 1) else {
            return false;
        };
        self.data.insert(idx, value);
        // Redrawing the cells drops any pending access highlight
        self.highlight = None;
        true
    }

    /// Remove the element at `index`. Valid for `0 <= index < len`.
    pub fn delete(&mut self, index: i64) -> bool {
        let Some(idx) = checked_index(index, self.data.len()) else {
            return false;
        };
        self.data.remove(idx);
        self.highlight = None;
        true
    }

    /// Highlight the cell at `index` until `now + highlight_duration`
    pub fn access(&mut self, index: i64, now: Instant) -> bool {
        let Some(idx) = checked_index(index, self.data.len()) else {
            return false;
        };
        self.highlight = Some(TimedHighlight::new(vec![idx], now, self.highlight_duration));
        true
    }

    pub fn has_highlight(&self) -> bool {
        self.highlight.is_some()
    }

    pub fn activate(&mut self, action: Action, panel: &ControlPanel, now: Instant) -> bool {
        match action {
            Action::Insert => {
                self.insert(panel.numeric(VALUE_INPUT), panel.numeric(INDEX_INPUT));
            }
            Action::Delete => {
                self.delete(panel.numeric(INDEX_INPUT));
            }
            Action::Access => {
                self.access(panel.numeric(INDEX_INPUT), now);
            }
            _ => return false,
        }
        true
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        expire_highlight(&mut self.highlight, now)
    }

    pub fn frame(&self) -> RenderFrame {
        let frame = RenderFrame::new(FrameLayout::IndexedCells, self.data.iter().copied());
        match &self.highlight {
            Some(h) => frame.with_highlights(h.indices.iter().copied()),
            None => frame,
        }
    }
}
